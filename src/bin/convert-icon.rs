use ascend_icons::convert_icon;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    convert_icon::main(convert_icon::Args::default())
}

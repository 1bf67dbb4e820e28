use ascend_icons::fix_icon_alpha;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    fix_icon_alpha::main(fix_icon_alpha::Args::default())
}

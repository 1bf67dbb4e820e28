use ascend_icons::*;

/// Ascend app icon tools
#[derive(argh::FromArgs)]
struct Args {
    #[argh(subcommand)]
    cmd: Cmd,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
pub enum Cmd {
    ConvertIcon(convert_icon::Args),
    FixIconAlpha(fix_icon_alpha::Args),
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = argh::from_env();
    match args.cmd {
        Cmd::ConvertIcon(args) => convert_icon::main(args),
        Cmd::FixIconAlpha(args) => fix_icon_alpha::main(args),
    }
}

use crate::{
    config::IconSetDir,
    logging,
    manifest::{IconSpec, APP_ICONS},
    rasterize,
    report::{Action, Tally},
};
use std::path::{Path, PathBuf};

/// Render the app icon set from the vector logo.
#[derive(argh::FromArgs, Debug, Default)]
#[argh(subcommand, name = "convert-icon")]
pub struct Args {
    /// icon set directory (default: Ascend/Assets.xcassets/AppIcon.appiconset)
    #[argh(option)]
    pub dir: Option<PathBuf>,

    /// vector source (default: logo.svg in the icon set directory)
    #[argh(option)]
    pub source: Option<PathBuf>,

    /// show debug output
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn main(args: Args) -> eyre::Result<()> {
    logging::init(args.verbose)?;
    let dir = IconSetDir::from(args.dir);
    let source = args.source.unwrap_or_else(|| dir.source_svg());

    let tally = run(&source, &dir, APP_ICONS)?;

    println!();
    if tally.failed == 0 {
        println!("Done! All icon sizes have been generated.");
    } else {
        println!(
            "Done! Generated {} icons, {} failed.",
            tally.ok, tally.failed
        );
    }
    Ok(())
}

/// Renders one PNG per entry of `icons` into `dir`. A missing `source` aborts
/// before anything is written; every other failure only affects its entry.
pub fn run(source: &Path, dir: &IconSetDir, icons: &[IconSpec]) -> eyre::Result<Tally> {
    if !source.exists() {
        eyre::bail!("{} not found", source.display());
    }

    let mut tally = Tally::default();
    for icon in icons {
        let png = dir.icon(icon.filename);
        let result = rasterize::rasterize_file(source, &png, icon.size).map(|()| Action::Ok);
        tally.record(
            format!("create {} ({}x{})", png.display(), icon.size, icon.size),
            &result,
        );
    }
    Ok(tally)
}

use crate::{config::IconSetDir, logging, report::Tally, strip_alpha};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

const NEXT_STEPS: &str = "Next steps:
1. Clean build folder in Xcode (Shift + Cmd + K)
2. Archive again (Product > Archive)
3. Try uploading to App Store Connect again";

/// Remove the alpha channel from the app icons.
#[derive(argh::FromArgs, Debug, Default)]
#[argh(subcommand, name = "fix-icon-alpha")]
pub struct Args {
    /// icon set directory (default: Ascend/Assets.xcassets/AppIcon.appiconset)
    #[argh(option)]
    pub dir: Option<PathBuf>,

    /// show debug output
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    MissingDirectory,
    Unlistable(String),
    Completed(Tally),
}

pub fn main(args: Args) -> eyre::Result<()> {
    logging::init(args.verbose)?;
    let dir = IconSetDir::from(args.dir);

    println!("Removing alpha channel from app icons...");
    println!();

    // problems with the directory itself are reported, but not an error exit
    match run(dir.path()) {
        Outcome::MissingDirectory => {
            println!("[{}] directory {} not found", "fail".red(), dir);
            println!("Make sure you run this from the project root directory.");
        }
        Outcome::Unlistable(error) => {
            println!("[{}] could not list {}: {}", "fail".red(), dir, error);
        }
        Outcome::Completed(tally) => {
            println!();
            print!(
                "Done! Fixed {} icons, {} were already OK.",
                tally.ok, tally.skipped
            );
            if tally.failed > 0 {
                print!(" {} failed.", tally.failed);
            }
            println!();
            println!();
            println!("{}", NEXT_STEPS);
        }
    }
    Ok(())
}

/// Flattens every transparent PNG in `dir`. Never fails: a missing or
/// unreadable directory is returned as its own outcome.
pub fn run(dir: &Path) -> Outcome {
    if !dir.exists() {
        return Outcome::MissingDirectory;
    }

    let files = match strip_alpha::icon_files(dir) {
        Ok(files) => files,
        Err(error) => {
            tracing::debug!(dir = %dir.display(), %error, "listing failed");
            return Outcome::Unlistable(error.to_string());
        }
    };
    let mut tally = Tally::default();
    for path in files {
        let result = strip_alpha::process(&path);
        tally.record(format!("strip alpha from {}", path.display()), &result);
    }
    Outcome::Completed(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    fn populate(dir: &Path) {
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]))
            .save(dir.join("AppIcon-20x20@1x.png"))
            .unwrap();
        GrayAlphaImage::from_pixel(8, 8, LumaA([0, 255]))
            .save(dir.join("AppIcon-29x29@1x.png"))
            .unwrap();
        RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]))
            .save(dir.join("AppIcon-40x40@1x.png"))
            .unwrap();
        std::fs::write(dir.join("Contents.json"), "{}").unwrap();
    }

    #[test]
    fn should_report_missing_directory() {
        let tmp = tempfile::TempDir::new().unwrap();

        let outcome = run(&tmp.path().join("missing"));

        assert_eq!(outcome, Outcome::MissingDirectory);
    }

    #[test]
    fn should_report_directory_that_cannot_be_listed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("AppIcon.appiconset");
        std::fs::write(&path, b"").unwrap();

        let outcome = run(&path);

        assert!(matches!(outcome, Outcome::Unlistable(_)));
        assert_eq!(std::fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn should_fix_transparent_icons() {
        let tmp = tempfile::TempDir::new().unwrap();
        populate(tmp.path());

        let outcome = run(tmp.path());

        assert_eq!(
            outcome,
            Outcome::Completed(Tally {
                ok: 2,
                skipped: 1,
                failed: 0
            })
        );
        for name in ["AppIcon-20x20@1x.png", "AppIcon-29x29@1x.png"] {
            let image = image::open(tmp.path().join(name)).unwrap();
            assert!(!image.color().has_alpha(), "{}", name);
        }
    }

    #[test]
    fn should_fix_nothing_on_second_run() {
        let tmp = tempfile::TempDir::new().unwrap();
        populate(tmp.path());

        run(tmp.path());
        let outcome = run(tmp.path());

        assert_eq!(
            outcome,
            Outcome::Completed(Tally {
                ok: 0,
                skipped: 3,
                failed: 0
            })
        );
    }

    #[test]
    fn should_treat_unreadable_png_as_ok() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("broken.png"), b"garbage").unwrap();

        let outcome = run(tmp.path());

        assert_eq!(
            outcome,
            Outcome::Completed(Tally {
                ok: 0,
                skipped: 1,
                failed: 0
            })
        );
        assert_eq!(
            std::fs::read(tmp.path().join("broken.png")).unwrap(),
            b"garbage"
        );
    }
}

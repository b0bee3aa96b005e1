use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[clap(version, about = "start the lhwsutil development container")]
pub struct Args {
    /// lhwsutil image name
    #[clap(short, long)]
    pub image: Option<String>,

    /// root of the lhwsutil project, defaults to $PWD
    #[clap(short, long = "project_root")]
    pub project_root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_flags_leaves_both_unset() {
        let args = Args::parse_from(["lhwsutil-dev"]);
        assert_eq!(args.image, None);
        assert_eq!(args.project_root, None);
    }

    #[test]
    fn short_flags() {
        let args = Args::parse_from(["lhwsutil-dev", "-i", "myimg:latest", "-p", "/home/dev/proj"]);
        assert_eq!(args.image.as_deref(), Some("myimg:latest"));
        assert_eq!(args.project_root, Some(PathBuf::from("/home/dev/proj")));
    }

    #[test]
    fn long_flags_use_underscore_spelling() {
        let args = Args::parse_from([
            "lhwsutil-dev",
            "--image",
            "myimg:latest",
            "--project_root",
            "/home/dev/proj",
        ]);
        assert_eq!(args.image.as_deref(), Some("myimg:latest"));
        assert_eq!(args.project_root, Some(PathBuf::from("/home/dev/proj")));

        assert!(Args::try_parse_from(["lhwsutil-dev", "--project-root", "/home/dev/proj"]).is_err());
    }
}

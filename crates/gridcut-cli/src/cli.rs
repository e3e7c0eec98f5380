use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Segment images into bands and slices and reassemble them as HTML.
#[derive(Debug, Parser)]
#[command(name = "gridcut", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the slice tree of an image
    Tree {
        /// Path to the image file (PNG or JPEG)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TreeFormat::Text)]
        format: TreeFormat,
    },

    /// Render an HTML table that reassembles the image from its slices
    Html {
        /// Path to the image file (PNG or JPEG)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output HTML file. Default: stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write slices as PNG files into this directory instead of
        /// embedding them as data URLs
        #[arg(long, value_name = "DIR")]
        slices_dir: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,
    },

    /// Crop every content cell and write each slice as a numbered PNG
    Slices {
        /// Path to the image file (PNG or JPEG)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Directory the slice files are written to
        #[arg(long, value_name = "DIR")]
        output_dir: PathBuf,

        /// Also write blank cells instead of skipping them
        #[arg(long)]
        blank: bool,
    },

    /// Render a preview PNG with band and segment boundaries drawn on top
    Overlay {
        /// Path to the image file (PNG or JPEG)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
}

/// Output format for the tree subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum TreeFormat {
    /// Indented band/segment listing
    Text,
    /// JSON serialization of the slice tree
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_tree_subcommand() {
        let cli = Cli::parse_from(["gridcut", "tree", "image.png"]);
        match cli.command {
            Commands::Tree { ref file, .. } => {
                assert_eq!(file, &PathBuf::from("image.png"));
            }
            _ => panic!("expected Tree subcommand"),
        }
    }

    #[test]
    fn tree_default_format_is_text() {
        let cli = Cli::parse_from(["gridcut", "tree", "image.png"]);
        match cli.command {
            Commands::Tree { ref format, .. } => {
                assert!(matches!(format, TreeFormat::Text));
            }
            _ => panic!("expected Tree subcommand"),
        }
    }

    #[test]
    fn parse_tree_with_json_format() {
        let cli = Cli::parse_from(["gridcut", "tree", "image.png", "--format", "json"]);
        match cli.command {
            Commands::Tree { ref format, .. } => {
                assert!(matches!(format, TreeFormat::Json));
            }
            _ => panic!("expected Tree subcommand"),
        }
    }

    #[test]
    fn parse_html_subcommand_defaults() {
        let cli = Cli::parse_from(["gridcut", "html", "image.png"]);
        match cli.command {
            Commands::Html {
                ref file,
                ref output,
                ref slices_dir,
                ref title,
            } => {
                assert_eq!(file, &PathBuf::from("image.png"));
                assert!(output.is_none());
                assert!(slices_dir.is_none());
                assert!(title.is_none());
            }
            _ => panic!("expected Html subcommand"),
        }
    }

    #[test]
    fn parse_html_with_all_options() {
        let cli = Cli::parse_from([
            "gridcut",
            "html",
            "image.png",
            "--output",
            "page.html",
            "--slices-dir",
            "slices",
            "--title",
            "My Image",
        ]);
        match cli.command {
            Commands::Html {
                ref output,
                ref slices_dir,
                ref title,
                ..
            } => {
                assert_eq!(output.as_deref(), Some(std::path::Path::new("page.html")));
                assert_eq!(slices_dir.as_deref(), Some(std::path::Path::new("slices")));
                assert_eq!(title.as_deref(), Some("My Image"));
            }
            _ => panic!("expected Html subcommand"),
        }
    }

    #[test]
    fn parse_slices_subcommand() {
        let cli = Cli::parse_from(["gridcut", "slices", "image.png", "--output-dir", "out"]);
        match cli.command {
            Commands::Slices {
                ref file,
                ref output_dir,
                blank,
            } => {
                assert_eq!(file, &PathBuf::from("image.png"));
                assert_eq!(output_dir, &PathBuf::from("out"));
                assert!(!blank);
            }
            _ => panic!("expected Slices subcommand"),
        }
    }

    #[test]
    fn parse_slices_with_blank_flag() {
        let cli = Cli::parse_from([
            "gridcut",
            "slices",
            "image.png",
            "--output-dir",
            "out",
            "--blank",
        ]);
        match cli.command {
            Commands::Slices { blank, .. } => {
                assert!(blank);
            }
            _ => panic!("expected Slices subcommand"),
        }
    }

    #[test]
    fn parse_overlay_subcommand() {
        let cli = Cli::parse_from(["gridcut", "overlay", "image.png", "--output", "preview.png"]);
        match cli.command {
            Commands::Overlay {
                ref file,
                ref output,
            } => {
                assert_eq!(file, &PathBuf::from("image.png"));
                assert_eq!(output, &PathBuf::from("preview.png"));
            }
            _ => panic!("expected Overlay subcommand"),
        }
    }
}

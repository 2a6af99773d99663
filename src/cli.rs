use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Search recipes for a comma separated ingredient list and print them as JSON
    Search {
        #[arg(short, long)]
        ingredients: String,
    },
    /// Detect ingredients in a photo
    Snap {
        /// Path to a PNG, JPEG or HEIC image
        #[arg(short, long)]
        image: PathBuf,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Guesses the upload MIME type from the file extension.
pub fn mime_type_for(path: &std::path::Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_search_subcommand() {
        let cli = Cli::try_parse_from(["pantry-match", "search", "--ingredients", "chicken,rice"]).unwrap();
        match cli.command {
            Command::Search { ingredients } => assert_eq!(ingredients, "chicken,rice"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn serve_port_is_optional() {
        let cli = Cli::try_parse_from(["pantry-match", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: None }));
    }

    #[test]
    fn snap_takes_image_path() {
        let cli = Cli::try_parse_from(["pantry-match", "snap", "-i", "fridge.jpg"]).unwrap();
        match cli.command {
            Command::Snap { image } => assert_eq!(image, PathBuf::from("fridge.jpg")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn mime_types_from_extension() {
        assert_eq!(mime_type_for(Path::new("fridge.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("fridge.heic")), "image/heic");
        assert_eq!(mime_type_for(Path::new("fridge")), "application/octet-stream");
    }
}

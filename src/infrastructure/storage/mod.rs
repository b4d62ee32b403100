mod output_directory;

pub use output_directory::LocalOutputDirectory;

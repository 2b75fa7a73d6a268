pub mod level_file;

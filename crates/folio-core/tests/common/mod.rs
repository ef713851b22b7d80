pub mod logo_dir;

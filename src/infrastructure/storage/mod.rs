mod temp_dir_spool;

pub use temp_dir_spool::TempDirSpool;

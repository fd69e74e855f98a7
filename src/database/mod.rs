pub mod school_repo;

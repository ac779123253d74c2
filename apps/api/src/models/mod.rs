pub mod career;
pub mod subject;

pub mod collaborators;
pub mod dependencies;

pub use dependencies::Dependencies;

mod builder;

pub use builder::LinearStateSpaceBuilder;

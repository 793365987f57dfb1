mod java;

pub use java::JavaRenderer;

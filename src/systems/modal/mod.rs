mod decomposer;

pub use decomposer::ModalDecomposer;

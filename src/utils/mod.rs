pub mod atomic_file;
pub mod xml_document;

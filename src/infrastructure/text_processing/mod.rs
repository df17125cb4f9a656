mod plain_text_adapter;

pub use plain_text_adapter::PlainTextAdapter;

// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV text generation with column-level quoting

mod csv_writer;

pub use csv_writer::{quote_field, CsvCell, CsvWriter};

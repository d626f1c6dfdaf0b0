mod csv_export;
#[allow(clippy::module_inception)]
mod record;
mod record_log;

pub use {csv_export::UTF8_BOM, record::Record, record_log::RecordLog};

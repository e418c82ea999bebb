mod export;
mod tables;

pub use self::export::ranked_csv as export_csv;
pub use self::tables::{
    ingest_summary as print_ingest_summary, pattern_groups as print_pattern_groups,
    store_top as print_store_top, tallies as print_tallies, trace as print_trace,
};

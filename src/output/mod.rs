//! Terminal output, tables, and result sinks

pub mod sink;
pub mod tables;
pub mod terminal;

pub use sink::{emit_bytes, emit_text};
pub use tables::{print_kv_table, print_table};
pub use terminal::{
    create_spinner, print_error, print_header, print_info, print_panel, print_success,
    print_warning,
};

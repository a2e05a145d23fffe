//! The startup banner: block-letter artwork on the left, product and memory
//! lines on the right.

use meminspect_lib::Result;

use crate::output::MemoryReadings;

/// Minimum width of each memory field.
pub const FIELD_WIDTH: usize = 8;

/// Shown in place of a number when a query failed.
pub const UNAVAILABLE: &str = "unavailable";

const COPYRIGHT: &str = "(c) Copyright A.Grimm 2021";

const ARTWORK: [&str; 7] = [
    "  #####  ######      ######     #     #####  ###  #####     ",
    " #     # #     #     #     #   # #   #     #  #  #     #    ",
    " #       #     #     #     #  #   #  #        #  #          ",
    " #  #### #     # ### ######  #     #  #####   #  #          ",
    " #     # #     #     #     # #######       #  #  #          ",
    " #     # #     #     #     # #     # #     #  #  #     #    ",
    "  #####  ######      ######  #     #  #####  ###  #####     ",
];

/// A memory reading right-aligned to [`FIELD_WIDTH`], or [`UNAVAILABLE`].
pub fn field(reading: &Result<u64>) -> String {
    match reading {
        Ok(bytes) => format!("{bytes:>FIELD_WIDTH$}"),
        Err(_) => format!("{UNAVAILABLE:>FIELD_WIDTH$}"),
    }
}

pub fn render(readings: &MemoryReadings) -> String {
    let captions = [
        String::new(),
        format!(
            "GriCom Basic Compiler Runtime, Rust Version {}",
            env!("CARGO_PKG_VERSION")
        ),
        COPYRIGHT.to_string(),
        String::new(),
        format!("Maximum memory (Bytes): {}", field(&readings.total)),
        format!("Free memory (Bytes): {}", field(&readings.free)),
        String::new(),
    ];

    ARTWORK
        .iter()
        .zip(captions)
        .map(|(art, caption)| format!("{art}{caption}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

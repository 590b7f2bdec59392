use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::convert::Conversion;
use crate::log_info;
use crate::zone::zone_map::ZoneMap;

#[derive(Serialize)]
pub struct ConversionOutput<'a> {
    pub domain: &'a str,
    pub ipv4_prefix: u32,
    pub ipv6_prefix: u32,
    pub ipv4_zones: &'a ZoneMap,
    pub ipv6_zones: &'a ZoneMap,
}

impl<'a> From<&'a Conversion> for ConversionOutput<'a> {
    fn from(conversion: &'a Conversion) -> Self {
        Self {
            domain: &conversion.domain,
            ipv4_prefix: conversion.ipv4_prefix,
            ipv6_prefix: conversion.ipv6_prefix,
            ipv4_zones: &conversion.ipv4,
            ipv6_zones: &conversion.ipv6,
        }
    }
}

impl ConversionOutput<'_> {
    pub fn write_to_file(&self, output_file: &str) -> Result<()> {
        let output_file = json_path(output_file);

        let file = File::create(&output_file)?;
        serde_json::to_writer_pretty(file, self)?;

        log_info!(format!("JSON output written to: {}", output_file.display()));

        Ok(())
    }
}

/// Appends `.json` unless the path already ends in it.
fn json_path(output_file: &str) -> PathBuf {
    if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        PathBuf::from(output_file)
    } else {
        PathBuf::from(format!("{output_file}.json"))
    }
}

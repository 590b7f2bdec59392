use colored::Colorize;
use std::fmt::Write;

use crate::zone::zone_map::ZoneMap;

pub const DEFAULT_BIND_DIR: &str = "/etc/bind/master";

fn banner(title: &str) -> String {
    format!("{} {} {}", "====".yellow(), title.bold(), "====".yellow())
}

/// One `{host}\tIN\tPTR\t{fqdn}` line per entry, under a bold zone header.
pub fn render_ptr_records(zones: &ZoneMap) -> String {
    let mut out = String::new();
    for (zone, entries) in zones.iter() {
        let _ = writeln!(out, "\n{}", zone.bold());
        for (host, fqdn) in entries.iter() {
            let _ = writeln!(out, "{host}\tIN\tPTR\t{fqdn}");
        }
    }
    out
}

/// A BIND `zone` stanza pointing at `{bind_dir}/{zone}`.
pub fn render_zone_stanza(zone: &str, bind_dir: &str) -> String {
    let bind_dir = bind_dir.trim_end_matches('/');
    format!("zone {zone} IN {{\n\ttype master;\n\tfile \"{bind_dir}/{zone}\";\n}};\n")
}

pub fn render_bind_config(zones: &ZoneMap, bind_dir: &str) -> String {
    zones
        .zone_names()
        .map(|zone| render_zone_stanza(zone, bind_dir))
        .collect()
}

/// Full report: PTR records for both families, then the BIND configuration.
pub fn render_report(ipv4: &ZoneMap, ipv6: &ZoneMap, bind_dir: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", banner("IPv4 Results:"));
    out.push_str(&render_ptr_records(ipv4));

    let _ = writeln!(out, "\n\n{}", banner("IPv6 Results:"));
    out.push_str(&render_ptr_records(ipv6));

    let _ = writeln!(out, "\n\n{}\n", banner("Bind config:"));
    out.push_str(&render_bind_config(ipv4, bind_dir));
    out.push('\n');
    out.push_str(&render_bind_config(ipv6, bind_dir));

    let _ = writeln!(out, "\n\n{}", banner("DONE"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zones() -> ZoneMap {
        let mut zones = ZoneMap::new();
        zones.insert(
            "0.0.10.in-addr.arpa".to_string(),
            "2".to_string(),
            "host3.example.com.".to_string(),
        );
        zones.insert(
            "0.0.10.in-addr.arpa".to_string(),
            "1".to_string(),
            "host1.example.com.".to_string(),
        );
        zones
    }

    #[test]
    fn ptr_lines_are_tab_separated() {
        colored::control::set_override(false);
        let rendered = render_ptr_records(&sample_zones());
        assert_eq!(
            rendered,
            "\n0.0.10.in-addr.arpa\n2\tIN\tPTR\thost3.example.com.\n1\tIN\tPTR\thost1.example.com.\n"
        );
    }

    #[test]
    fn zone_stanza_layout() {
        assert_eq!(
            render_zone_stanza("1.168.192.in-addr.arpa", DEFAULT_BIND_DIR),
            "zone 1.168.192.in-addr.arpa IN {\n\ttype master;\n\tfile \"/etc/bind/master/1.168.192.in-addr.arpa\";\n};\n"
        );
    }

    #[test]
    fn zone_stanza_trims_trailing_slash() {
        let stanza = render_zone_stanza("0.10.in-addr.arpa", "/var/named/");
        assert!(stanza.contains("file \"/var/named/0.10.in-addr.arpa\";"));
    }

    #[test]
    fn bind_config_has_one_stanza_per_zone() {
        let mut zones = sample_zones();
        zones.insert(
            "1.0.10.in-addr.arpa".to_string(),
            "7".to_string(),
            "other.example.com.".to_string(),
        );
        let config = render_bind_config(&zones, DEFAULT_BIND_DIR);
        assert_eq!(config.matches("type master;").count(), 2);
        assert!(config.starts_with("zone 0.0.10.in-addr.arpa IN {"));
    }

    #[test]
    fn report_orders_sections() {
        colored::control::set_override(false);
        let report = render_report(&sample_zones(), &ZoneMap::new(), DEFAULT_BIND_DIR);
        let ipv4 = report.find("IPv4 Results:").unwrap();
        let ipv6 = report.find("IPv6 Results:").unwrap();
        let bind = report.find("Bind config:").unwrap();
        let done = report.find("DONE").unwrap();
        assert!(ipv4 < ipv6 && ipv6 < bind && bind < done);
        assert!(report.contains("2\tIN\tPTR\thost3.example.com."));
    }

    #[test]
    fn empty_maps_render_headers_only() {
        colored::control::set_override(false);
        let report = render_report(&ZoneMap::new(), &ZoneMap::new(), DEFAULT_BIND_DIR);
        assert!(!report.contains("PTR"));
        assert!(!report.contains("zone "));
    }
}

//! UUID generation handlers

use std::process::ExitCode;

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use crate::cli::args::{UuidGenerateArgs, UuidNamespace};
use crate::error::{OpskitError, Result};
use crate::output;

pub fn run_generate(args: UuidGenerateArgs) -> Result<ExitCode> {
    if !matches!(args.version, 1 | 4 | 5) {
        return Err(OpskitError::input(format!(
            "unsupported UUID version {}. Supported: 1, 4, 5",
            args.version
        )));
    }
    if args.version == 5 && args.name.is_none() {
        return Err(OpskitError::missing_argument(
            "UUID v5 requires --name to derive from",
        ));
    }

    let mut rows = Vec::with_capacity(args.count);
    for index in 1..=args.count {
        let id = match args.version {
            1 => Uuid::now_v1(&random_node_id()),
            4 => Uuid::new_v4(),
            _ => {
                let name = args.name.as_deref().unwrap_or_default();
                Uuid::new_v5(&namespace_uuid(args.namespace), name.as_bytes())
            }
        };
        let rendered = if args.upper {
            id.to_string().to_uppercase()
        } else {
            id.to_string()
        };
        rows.push(vec![index.to_string(), rendered]);
    }

    output::print_header(&format!("UUID v{}", args.version));
    output::print_table(&["#", "UUID"], &rows);
    Ok(ExitCode::SUCCESS)
}

/// Random node id with the multicast bit set, per RFC 4122 section 4.5
fn random_node_id() -> [u8; 6] {
    let mut node = [0u8; 6];
    OsRng.fill_bytes(&mut node);
    node[0] |= 0x01;
    node
}

fn namespace_uuid(namespace: UuidNamespace) -> Uuid {
    match namespace {
        UuidNamespace::Dns => Uuid::NAMESPACE_DNS,
        UuidNamespace::Url => Uuid::NAMESPACE_URL,
        UuidNamespace::Oid => Uuid::NAMESPACE_OID,
        UuidNamespace::X500 => Uuid::NAMESPACE_X500,
        UuidNamespace::Custom(id) => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_multicast() {
        for _ in 0..16 {
            assert_eq!(random_node_id()[0] & 0x01, 0x01);
        }
    }

    #[test]
    fn v5_is_deterministic_per_namespace() {
        let dns = Uuid::new_v5(&namespace_uuid(UuidNamespace::Dns), b"example.com");
        let again = Uuid::new_v5(&namespace_uuid(UuidNamespace::Dns), b"example.com");
        let url = Uuid::new_v5(&namespace_uuid(UuidNamespace::Url), b"example.com");
        assert_eq!(dns, again);
        assert_ne!(dns, url);
        assert_eq!(dns.get_version_num(), 5);
    }
}

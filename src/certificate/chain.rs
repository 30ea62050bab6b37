//! Leaf certificate retrieval over a live TLS handshake

use crate::certificate::info::{parse_certificate, CertificateInfo};
use crate::error::{OpskitError, Result};
use rustls::pki_types::ServerName;
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of a completed handshake
#[derive(Debug)]
pub struct TlsHandshake {
    pub certificate: CertificateInfo,
    pub protocol: String,
    pub cipher: Option<String>,
    pub response_time_ms: u64,
}

/// Connect to `host:port`, complete a TLS handshake, and capture the
/// leaf certificate the server presents
///
/// Verification is disabled on purpose: expired and otherwise invalid
/// certificates still need to be inspectable.
pub fn fetch_certificate(host: &str, port: u16, timeout: Duration) -> Result<TlsHandshake> {
    let start = Instant::now();

    let config = rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(InspectionVerifier))
        .with_no_client_auth();

    let server_name: ServerName<'_> = host
        .to_string()
        .try_into()
        .map_err(|_| OpskitError::resolution(format!("invalid hostname: {}", host)))?;

    let mut conn = rustls::ClientConnection::new(Arc::new(config), server_name.to_owned())
        .map_err(|e| OpskitError::tls(format!("failed to start TLS session: {}", e)))?;

    let address = format!("{}:{}", host, port);
    let socket_addr = address
        .to_socket_addrs()
        .map_err(|e| OpskitError::resolution(format!("failed to resolve {}: {}", address, e)))?
        .next()
        .ok_or_else(|| OpskitError::resolution(format!("no addresses found for {}", address)))?;

    let mut sock = TcpStream::connect_timeout(&socket_addr, timeout)
        .map_err(|e| OpskitError::connection(format!("failed to connect to {}: {}", address, e)))?;
    sock.set_read_timeout(Some(timeout))?;
    sock.set_write_timeout(Some(timeout))?;

    let mut tls = rustls::Stream::new(&mut conn, &mut sock);
    tls.flush()
        .map_err(|e| OpskitError::tls(format!("TLS handshake with {} failed: {}", address, e)))?;

    // Reading one byte forces the handshake to complete
    let mut buf = [0u8; 1];
    let _ = tls.read(&mut buf);

    let response_time_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(%address, response_time_ms, "handshake complete");

    let protocol = conn
        .protocol_version()
        .map(|v| format!("{:?}", v))
        .unwrap_or_else(|| "Unknown".to_string());

    let cipher = conn
        .negotiated_cipher_suite()
        .map(|c| format!("{:?}", c.suite()));

    let leaf = conn
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| OpskitError::tls(format!("no certificate received from {}", address)))?;

    let certificate = parse_certificate(leaf.as_ref())?;

    Ok(TlsHandshake {
        certificate,
        protocol,
        cipher,
        response_time_ms,
    })
}

/// Verifier that accepts every certificate so the chain can be captured
/// even when validation would fail
#[derive(Debug)]
struct InspectionVerifier;

impl rustls::client::danger::ServerCertVerifier for InspectionVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &rustls::pki_types::CertificateDer<'_>,
        _intermediates: &[rustls::pki_types::CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: rustls::pki_types::UnixTime,
    ) -> std::result::Result<rustls::client::danger::ServerCertVerified, rustls::Error> {
        Ok(rustls::client::danger::ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &rustls::pki_types::CertificateDer<'_>,
        _dss: &rustls::DigitallySignedStruct,
    ) -> std::result::Result<rustls::client::danger::HandshakeSignatureValid, rustls::Error> {
        Ok(rustls::client::danger::HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &rustls::pki_types::CertificateDer<'_>,
        _dss: &rustls::DigitallySignedStruct,
    ) -> std::result::Result<rustls::client::danger::HandshakeSignatureValid, rustls::Error> {
        Ok(rustls::client::danger::HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<rustls::SignatureScheme> {
        vec![
            rustls::SignatureScheme::RSA_PKCS1_SHA256,
            rustls::SignatureScheme::RSA_PKCS1_SHA384,
            rustls::SignatureScheme::RSA_PKCS1_SHA512,
            rustls::SignatureScheme::RSA_PSS_SHA256,
            rustls::SignatureScheme::RSA_PSS_SHA384,
            rustls::SignatureScheme::RSA_PSS_SHA512,
            rustls::SignatureScheme::ECDSA_NISTP256_SHA256,
            rustls::SignatureScheme::ECDSA_NISTP384_SHA384,
            rustls::SignatureScheme::ECDSA_NISTP521_SHA512,
            rustls::SignatureScheme::ED25519,
        ]
    }
}

#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz OpenVEX document parsing.
///
/// Any document that parses is also matched, resolved and hashed, so the
/// whole read path runs on attacker-shaped input.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = vex_tools::parsers::parse_document(data) {
        if let Some(statement) = doc.statements.first() {
            let vuln = statement.vulnerability.name.clone();
            let product = statement.products.first().map(|p| p.id().to_string());
            if let Some(product) = product {
                let _ = doc.matches(&vuln, &product, &[product.as_str()]);
                let _ = doc.effective_statement(&product, &vuln);
            }
        }
        let _ = doc.canonical_hash();
    }
});

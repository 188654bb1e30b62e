use crate::ddb;
use crate::error::Result;
use crate::lxnav;

/// Turns a raw DDB JSON payload into an LXNAV FLARMNET database file.
pub fn convert(json: &[u8]) -> Result<Vec<u8>> {
    let xml = convert_to_xml(json)?;
    Ok(lxnav::encode(&xml))
}

/// Same as [`convert`], minus the final byte shift.
pub fn convert_to_xml(json: &[u8]) -> Result<Vec<u8>> {
    let devices = ddb::parse(json)?;
    info!("Generating LXNAV database");
    debug!("Converting {} device records", devices.len());
    Ok(lxnav::render(&devices))
}

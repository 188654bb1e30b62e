use crate::ddb::OGNDevice;

/// Database version announced in the `FLARMNET` root element.
pub const FLARMNET_VERSION: &str = "008423";

/// Renders the device records as a FLARMNET XML document.
///
/// Values are interpolated verbatim. LXNAV units expect exactly this layout,
/// so nothing is escaped and `AIRFIELD` repeats the registration because the
/// DDB has no airfield field.
pub fn render(devices: &[OGNDevice]) -> Vec<u8> {
    let mut xml = String::with_capacity(64 + devices.len() * 192);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<FLARMNET Version=\"{}\">\n", FLARMNET_VERSION));

    for device in devices {
        xml.push_str(&format!(
            "<FLARMDATA FlarmID=\"{}\">\n  \
             <NAME></NAME>\n  \
             <AIRFIELD>{}</AIRFIELD>\n  \
             <TYPE>{}</TYPE>\n  \
             <REG>{}</REG>\n  \
             <COMPID>{}</COMPID>\n  \
             <FREQUENCY></FREQUENCY>\n\
             </FLARMDATA>\n",
            device.device_id,
            device.registration,
            device.aircraft_model,
            device.registration,
            device.cn,
        ));
    }

    xml.push_str("</FLARMNET>\n");
    xml.into_bytes()
}

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use slipbridge_link::{list_ports, SerialPortType};

use crate::cmd::PortsArgs;
use crate::exit::{link_error, CliResult, SUCCESS};

pub fn run(_args: PortsArgs) -> CliResult<i32> {
    let ports = list_ports().map_err(|err| link_error("port enumeration failed", err))?;

    if ports.is_empty() {
        println!("no serial ports found");
        return Ok(SUCCESS);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["PORT", "TYPE", "DESCRIPTION"]);

    for port in ports {
        let (kind, description) = describe(&port.port_type);
        table.add_row(vec![port.port_name, kind.to_string(), description]);
    }

    println!("{table}");
    Ok(SUCCESS)
}

fn describe(port_type: &SerialPortType) -> (&'static str, String) {
    match port_type {
        SerialPortType::UsbPort(info) => {
            let product = info.product.as_deref().unwrap_or("USB serial device");
            (
                "usb",
                format!("{product} ({:04x}:{:04x})", info.vid, info.pid),
            )
        }
        SerialPortType::PciPort => ("pci", String::new()),
        SerialPortType::BluetoothPort => ("bluetooth", String::new()),
        SerialPortType::Unknown => ("unknown", String::new()),
    }
}

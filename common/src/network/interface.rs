use pnet::datalink::NetworkInterface;

/// Reasons the configured interface looks unfit for sending ARP requests.
///
/// These are advisory. The ARP tool is still invoked.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InterfaceWarning {
    /// No interface with that name exists on this host.
    NotFound,
    /// The interface is operationally down.
    IsDown,
    /// The interface is a loopback device.
    IsLoopback,
    /// The interface does not support broadcast (required for ARP).
    NotBroadcast,
    /// The interface has no MAC address.
    NoMacAddress,
}

impl InterfaceWarning {
    pub fn describe(&self) -> &'static str {
        match self {
            InterfaceWarning::NotFound => "does not exist",
            InterfaceWarning::IsDown => "is down",
            InterfaceWarning::IsLoopback => "is a loopback device",
            InterfaceWarning::NotBroadcast => "does not support broadcast",
            InterfaceWarning::NoMacAddress => "has no MAC address",
        }
    }
}

/// Checks `name` against the interfaces reported by the OS.
pub fn check_interface(name: &str) -> Result<(), InterfaceWarning> {
    check_interface_in(name, &pnet::datalink::interfaces())
}

pub fn check_interface_in(name: &str, interfaces: &[NetworkInterface]) -> Result<(), InterfaceWarning> {
    let interface: &NetworkInterface = interfaces
        .iter()
        .find(|i| i.name == name)
        .ok_or(InterfaceWarning::NotFound)?;

    if !interface.is_up() {
        return Err(InterfaceWarning::IsDown);
    }
    if interface.is_loopback() {
        return Err(InterfaceWarning::IsLoopback);
    }
    if !interface.is_broadcast() {
        return Err(InterfaceWarning::NotBroadcast);
    }
    if interface.mac.is_none() {
        return Err(InterfaceWarning::NoMacAddress);
    }
    Ok(())
}

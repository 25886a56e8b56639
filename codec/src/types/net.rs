//! String implementations for network addresses
//!
//! Addresses have a canonical textual form, so they are written as their `Display` output.

use crate::{types::wrappers::write_display, Error, Sink, Write};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

macro_rules! impl_write_display {
    ($($type:ty),+) => {
        $(
            impl Write for $type {
                #[inline]
                fn write(&self, sink: &mut Sink) -> Result<(), Error> {
                    write_display(sink, self)
                }
            }
        )+
    };
}

impl_write_display!(Ipv4Addr, Ipv6Addr, IpAddr, SocketAddrV4, SocketAddrV6, SocketAddr);

#[cfg(test)]
mod tests {
    use crate::marshal;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV6};

    #[test]
    fn test_ip() {
        assert_eq!(
            marshal(&Ipv4Addr::new(127, 0, 0, 1)).unwrap(),
            r#""127.0.0.1""#
        );
        assert_eq!(marshal(&Ipv6Addr::LOCALHOST).unwrap(), r#""::1""#);
        assert_eq!(
            marshal(&IpAddr::V4(Ipv4Addr::UNSPECIFIED)).unwrap(),
            r#""0.0.0.0""#
        );
    }

    #[test]
    fn test_socket() {
        let addr = SocketAddr::from(([10, 0, 0, 2], 8080));
        assert_eq!(marshal(&addr).unwrap(), r#""10.0.0.2:8080""#);

        let addr = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 443, 0, 0);
        assert_eq!(marshal(&addr).unwrap(), r#""[::1]:443""#);
    }

    #[test]
    fn test_address_list() {
        let addrs = vec![Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(8, 8, 8, 8)];
        assert_eq!(marshal(&addrs).unwrap(), r#"{"1.1.1.1","8.8.8.8"}"#);
    }
}

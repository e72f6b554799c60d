//! IPv4 netmask arithmetic.

use core::net::Ipv4Addr;

/// Returns the CIDR prefix length of `mask`.
///
/// Returns `None` if the one bits of the mask are not contiguous (e.g. `255.0.255.0`).
pub const fn prefix_len(mask: Ipv4Addr) -> Option<u8> {
    let bits = mask.to_bits();
    let host_bits = !bits;

    // the host part must be of the form 0..01..1
    if host_bits & host_bits.wrapping_add(1) != 0 {
        return None;
    }
    Some(bits.leading_ones() as u8)
}

/// Network address of `addr` under `mask`.
pub const fn network(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from_bits(addr.to_bits() & mask.to_bits())
}

/// Directed broadcast address of `addr` under `mask`.
pub const fn broadcast(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from_bits(addr.to_bits() | !mask.to_bits())
}

pub const fn same_network(a: Ipv4Addr, b: Ipv4Addr, mask: Ipv4Addr) -> bool {
    let mask = mask.to_bits();
    a.to_bits() & mask == b.to_bits() & mask
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_prefix_len_contiguous() {
        let values: &[(Ipv4Addr, u8)] = &[
            (Ipv4Addr::new(0, 0, 0, 0), 0),
            (Ipv4Addr::new(128, 0, 0, 0), 1),
            (Ipv4Addr::new(255, 0, 0, 0), 8),
            (Ipv4Addr::new(255, 255, 240, 0), 20),
            (Ipv4Addr::new(255, 255, 255, 0), 24),
            (Ipv4Addr::new(255, 255, 255, 252), 30),
            (Ipv4Addr::new(255, 255, 255, 255), 32),
        ];

        for &(mask, expected) in values {
            assert_eq!(
                prefix_len(mask),
                Some(expected),
                "prefix length of {}",
                mask
            );
        }
    }

    #[test]
    fn test_prefix_len_non_contiguous() {
        assert_eq!(prefix_len(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(prefix_len(Ipv4Addr::new(0, 0, 0, 255)), None);
        assert_eq!(prefix_len(Ipv4Addr::new(255, 255, 255, 1)), None);
    }

    #[test]
    fn test_network_and_broadcast() {
        let mask = Ipv4Addr::new(255, 255, 255, 0);
        let addr = Ipv4Addr::new(192, 168, 1, 10);

        assert_eq!(network(addr, mask), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast(addr, mask), Ipv4Addr::new(192, 168, 1, 255));

        let mask = Ipv4Addr::new(255, 255, 252, 0);
        let addr = Ipv4Addr::new(10, 0, 6, 77);

        assert_eq!(network(addr, mask), Ipv4Addr::new(10, 0, 4, 0));
        assert_eq!(broadcast(addr, mask), Ipv4Addr::new(10, 0, 7, 255));
    }

    #[test]
    fn test_same_network() {
        let mask = Ipv4Addr::new(255, 255, 255, 0);

        assert!(same_network(
            Ipv4Addr::new(192, 168, 1, 10),
            Ipv4Addr::new(192, 168, 1, 1),
            mask
        ));
        assert!(!same_network(
            Ipv4Addr::new(192, 168, 2, 10),
            Ipv4Addr::new(192, 168, 1, 1),
            mask
        ));
        // everything shares the /0 network
        assert!(same_network(
            Ipv4Addr::new(8, 8, 8, 8),
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::UNSPECIFIED
        ));
    }
}

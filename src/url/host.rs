//! Separating the port from a host string.

/// Split a host as written in a URL authority into the bare host and its port.
///
/// The host is scanned from the end: a `:` preceded only by decimal digits
/// (scanning backwards) marks the port. Anything else means there is no port
/// and the whole input is the host. Only a trailing all-digit segment counts,
/// so unbracketed IPv6 literals are not split meaningfully.
///
/// # Examples
///
/// ```
/// use tldurl::split_host;
///
/// assert_eq!(split_host("example.com:8080"), ("example.com", "8080"));
/// assert_eq!(split_host("example.com"), ("example.com", ""));
/// assert_eq!(split_host("[::1]:80"), ("[::1]", "80"));
/// ```
pub fn split_host(host: &str) -> (&str, &str) {
    for (i, b) in host.bytes().enumerate().rev() {
        match b {
            b':' => return (&host[..i], &host[i + 1..]),
            b'0'..=b'9' => continue,
            _ => break,
        }
    }
    (host, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_with_port() {
        assert_eq!(split_host("example.com:8080"), ("example.com", "8080"));
        assert_eq!(split_host("sub.example.com.eg:443"), ("sub.example.com.eg", "443"));
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(split_host("example.com"), ("example.com", ""));
        assert_eq!(split_host("a1.example2.com3"), ("a1.example2.com3", ""));
        assert_eq!(split_host(""), ("", ""));
    }

    #[test]
    fn test_empty_port() {
        assert_eq!(split_host("example.com:"), ("example.com", ""));
    }

    #[test]
    fn test_all_digits() {
        // no colon at all
        assert_eq!(split_host("8080"), ("8080", ""));
        assert_eq!(split_host(":8080"), ("", "8080"));
    }

    #[test]
    fn test_ipv6_literals() {
        assert_eq!(split_host("[::1]:80"), ("[::1]", "80"));
        assert_eq!(split_host("[::1]"), ("[::1]", ""));
        // unbracketed: only the trailing digit segment is taken
        assert_eq!(split_host("2001:db8::1"), ("2001:db8:", "1"));
        assert_eq!(split_host("fe80::abcd"), ("fe80::abcd", ""));
    }

    #[test]
    fn test_non_digit_port_is_host() {
        assert_eq!(split_host("example.com:http"), ("example.com:http", ""));
    }
}

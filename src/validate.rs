//! Turns raw user text into the typed inputs of the simulators.
//!
//! Everything the simulators assume about their input (non-empty queues,
//! positive frame counts, cylinders inside the disk) is checked here. A
//! rejected input is reported as [`crate::error::Error::Value`] carrying a
//! message meant for the user.

use crate::disk::Cylinder;
use crate::error::Result;
use crate::paging::PageId;
use crate::value_err;

/// A validated disk scheduling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRequest {
    pub disk_size: usize,
    pub head: Cylinder,
    pub requests: Vec<Cylinder>,
}

fn parse_integers(text: &str) -> Option<Vec<i64>> {
    text.split_whitespace().map(|t| t.parse::<i64>().ok()).collect()
}

/// Parse a whitespace separated reference string.
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    if text.trim().is_empty() {
        return Err(value_err!("Reference string is empty."));
    }
    let pages = parse_integers(text)
        .ok_or_else(|| value_err!("Reference string must contain only integers."))?;
    pages
        .into_iter()
        .map(|p| PageId::try_from(p).map_err(|_| value_err!("Page numbers must be non-negative integers.")))
        .collect()
}

pub fn parse_frame_count(text: &str) -> Result<usize> {
    let frames = text
        .trim()
        .parse::<i64>()
        .map_err(|_| value_err!("Number of frames must be a valid integer."))?;
    if frames <= 0 {
        return Err(value_err!("Number of frames must be greater than 0."));
    }
    Ok(usize::try_from(frames)?)
}

/// Parse and range-check the disk size, the head position and the request
/// queue. The head and every request must lie in `[0, disk_size)`.
pub fn parse_disk_request(disk_size: &str, head: &str, requests: &str) -> Result<DiskRequest> {
    let invalid = || value_err!("Invalid input. Use numeric values.");
    let disk_size = disk_size.trim().parse::<i64>().map_err(|_| invalid())?;
    let head = head.trim().parse::<i64>().map_err(|_| invalid())?;
    if requests.trim().is_empty() {
        return Err(value_err!("Please enter the request queue."));
    }
    let requests = parse_integers(requests).ok_or_else(invalid)?;

    if disk_size <= 0 || head < 0 {
        return Err(value_err!("Disk size and head position must be positive."));
    }
    let in_range = |c: i64| (0..disk_size).contains(&c);
    if !in_range(head) || !requests.iter().all(|&r| in_range(r)) {
        return Err(value_err!("Requests and head must be within disk size range."));
    }

    Ok(DiskRequest {
        disk_size: usize::try_from(disk_size)?,
        head: Cylinder::try_from(head)?,
        requests: requests.into_iter().map(Cylinder::try_from).collect::<std::result::Result<_, _>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn value(msg: &str) -> Error {
        Error::Value(msg.to_string())
    }

    #[test]
    fn test_parse_references() -> Result<()> {
        assert_eq!(vec![7, 0, 1, 2, 0], parse_references(" 7 0  1 2\t0 ")?);
        assert_eq!(Err(value("Reference string is empty.")), parse_references("   "));
        assert_eq!(
            Err(value("Reference string must contain only integers.")),
            parse_references("1 2 x")
        );
        assert_eq!(
            Err(value("Page numbers must be non-negative integers.")),
            parse_references("1 -2 3")
        );
        Ok(())
    }

    #[test]
    fn test_parse_frame_count() -> Result<()> {
        assert_eq!(3, parse_frame_count(" 3 ")?);
        assert_eq!(Err(value("Number of frames must be a valid integer.")), parse_frame_count("three"));
        assert_eq!(Err(value("Number of frames must be greater than 0.")), parse_frame_count("0"));
        assert_eq!(Err(value("Number of frames must be greater than 0.")), parse_frame_count("-4"));
        Ok(())
    }

    #[test]
    fn test_parse_disk_request() -> Result<()> {
        let req = parse_disk_request("200", "53", "98 183 37 122 14 124 65 67")?;
        assert_eq!(
            DiskRequest { disk_size: 200, head: 53, requests: vec![98, 183, 37, 122, 14, 124, 65, 67] },
            req
        );

        let invalid = value("Invalid input. Use numeric values.");
        assert_eq!(Err(invalid.clone()), parse_disk_request("abc", "53", "1"));
        assert_eq!(Err(invalid.clone()), parse_disk_request("200", "", "1"));
        assert_eq!(Err(invalid), parse_disk_request("200", "53", "1 two"));

        assert_eq!(Err(value("Please enter the request queue.")), parse_disk_request("200", "53", " "));

        let positive = value("Disk size and head position must be positive.");
        assert_eq!(Err(positive.clone()), parse_disk_request("0", "0", "1"));
        assert_eq!(Err(positive), parse_disk_request("200", "-1", "1"));

        let range = value("Requests and head must be within disk size range.");
        assert_eq!(Err(range.clone()), parse_disk_request("200", "200", "1"));
        assert_eq!(Err(range.clone()), parse_disk_request("200", "53", "1 200"));
        assert_eq!(Err(range), parse_disk_request("200", "53", "1 -3"));
        Ok(())
    }
}

use log::debug;

use super::partition;
use super::Cylinder;
use super::Head;
use super::SeekResult;

/// C-SCAN sweeps upward serving requests, and when requests remain below
/// the head it continues to the last cylinder, returns to cylinder 0 and
/// sweeps upward again. The return trip is counted as head movement.
///
/// When nothing is pending below the head the sweep stops at the last
/// request instead of running on to the edge of the disk.
pub fn cscan(requests: &[Cylinder], head: Cylinder, disk_size: usize) -> SeekResult {
    assert!(disk_size > 0, "disk size should be larger than zero");
    let (left, right) = partition(requests, head);
    let mut h = Head::new(head);

    for r in right {
        h.seek(r);
    }

    if !left.is_empty() {
        let edge = disk_size - 1;
        if h.current != edge {
            h.seek(edge);
        }
        debug!("c-scan: wrap from {} to 0", h.current);
        h.wrap();
        for r in left {
            h.seek(r);
        }
    }

    h.finish()
}

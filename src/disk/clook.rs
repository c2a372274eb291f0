use log::debug;

use super::partition;
use super::Cylinder;
use super::Head;
use super::SeekResult;

/// C-LOOK serves every request at or above the head in ascending order,
/// then jumps straight back to the lowest pending request and sweeps up
/// again. The head never travels past the outermost request.
///
/// The jump lands on the lowest request and that request is then served
/// from where the head already is, so it contributes a zero-length hop.
pub fn clook(requests: &[Cylinder], head: Cylinder) -> SeekResult {
    let (left, right) = partition(requests, head);
    let mut h = Head::new(head);

    for r in right {
        h.seek(r);
    }

    if let Some(&lowest) = left.first() {
        debug!("c-look: jump from {} to {}", h.current, lowest);
        h.jump(lowest);
        for r in left {
            h.seek(r);
        }
    }

    h.finish()
}

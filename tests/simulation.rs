use std::collections::BTreeMap;
use std::collections::HashSet;

use ossim::disk::clook;
use ossim::disk::cscan;
use ossim::disk::DiskAlgorithm;
use ossim::error::Result;
use ossim::paging::compute_aging_history;
use ossim::paging::optimal;
use ossim::paging::second_chance;
use ossim::paging::ReplacementPolicy;
use ossim::paging::StepTrace;
use ossim::validate;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

macro_rules! setup {
    ($rng:ident) => {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut $rng = StdRng::seed_from_u64(0x5eed);
    };
}

fn random_refs(rng: &mut StdRng) -> Vec<usize> {
    let len = rng.gen_range(1..40);
    let pages = rng.gen_range(1..10);
    (0..len).map(|_| rng.gen_range(0..pages)).collect()
}

fn seek_of(order: &[usize]) -> usize {
    order.windows(2).map(|w| w[0].abs_diff(w[1])).sum()
}

/// Remove every request from the service order, what is left are the head
/// and the synthetic C-SCAN stops.
fn leftover(order: &[usize], requests: &[usize]) -> Vec<usize> {
    let mut rest = order.to_vec();
    for r in requests {
        let i = rest.iter().rposition(|c| c == r).expect("request is served");
        rest.remove(i);
    }
    rest
}

#[test]
fn test_seek_distance_matches_order() -> Result<()> {
    setup!(rng);
    for _ in 0..200 {
        let disk_size = rng.gen_range(1..300);
        let head = rng.gen_range(0..disk_size);
        let n = rng.gen_range(0..20);
        let requests: Vec<usize> = (0..n).map(|_| rng.gen_range(0..disk_size)).collect();

        let result = clook(&requests, head);
        assert_eq!(head, result.order[0]);
        assert_eq!(seek_of(&result.order), result.total_seek);
        assert_eq!(vec![head], leftover(&result.order, &requests));

        let result = cscan(&requests, head, disk_size);
        assert_eq!(head, result.order[0]);
        assert_eq!(seek_of(&result.order), result.total_seek);
        let rest = leftover(&result.order, &requests);
        assert_eq!(head, rest[0]);
        assert!(rest[1..].iter().all(|&c| c == 0 || c == disk_size - 1), "{:?}", rest);
        assert!(result.order.iter().all(|&c| c < disk_size));
    }
    Ok(())
}

#[test]
fn test_empty_queue() -> Result<()> {
    for algo in DiskAlgorithm::ALL {
        let result = algo.schedule(&[], 17, 100);
        assert_eq!(vec![17], result.order);
        assert_eq!(0, result.total_seek);
    }
    Ok(())
}

fn check_trace(trace: &StepTrace, references: &[usize], frame_count: usize) {
    assert_eq!(references.len(), trace.len());
    assert_eq!(references.len(), trace.page_faults() + trace.hits());

    let mut previous: HashSet<usize> = HashSet::new();
    for (step, &page) in trace.steps().iter().zip(references) {
        assert_eq!(page, step.page);
        assert_eq!(frame_count, step.frames.len());
        let resident: HashSet<usize> = step.resident().collect();
        assert_eq!(resident.len(), step.resident_count(), "a page is resident twice");
        assert!(resident.len() <= frame_count);
        assert!(resident.contains(&page));
        assert_eq!(!previous.contains(&page), step.fault);
        previous = resident;
    }
}

#[test]
fn test_replacement_invariants() -> Result<()> {
    setup!(rng);
    for _ in 0..200 {
        let references = random_refs(&mut rng);
        let frame_count = rng.gen_range(1..6);

        let opt = optimal(&references, frame_count);
        check_trace(&opt, &references, frame_count);

        let clock = second_chance(&references, frame_count);
        check_trace(&clock, &references, frame_count);
        for step in clock.steps() {
            let bits = step.ref_bits.as_ref().expect("clock records reference bits");
            assert_eq!(frame_count, bits.len());
            for (slot, bit) in step.frames.iter().zip(bits) {
                if slot.is_none() {
                    assert!(!bit, "an empty slot has its reference bit set");
                }
            }
        }

        // no policy beats Belady's.
        assert!(opt.page_faults() <= clock.page_faults());
    }
    Ok(())
}

#[test]
fn test_simulation_is_deterministic() -> Result<()> {
    setup!(rng);
    for _ in 0..20 {
        let references = random_refs(&mut rng);
        for policy in [ReplacementPolicy::Optimal, ReplacementPolicy::SecondChance] {
            assert_eq!(policy.simulate(&references, 3), policy.simulate(&references, 3));
        }
        let requests: Vec<usize> = references.iter().map(|r| r * 20).collect();
        for algo in DiskAlgorithm::ALL {
            assert_eq!(algo.schedule(&requests, 90, 200), algo.schedule(&requests, 90, 200));
        }
    }
    Ok(())
}

#[test]
fn test_aging_restarts_for_new_residents() -> Result<()> {
    setup!(rng);
    for _ in 0..100 {
        let references = random_refs(&mut rng);
        let frame_count = rng.gen_range(1..5);
        let trace = compute_aging_history(second_chance(&references, frame_count));

        let mut previous: BTreeMap<usize, u8> = BTreeMap::new();
        for step in trace.steps() {
            let registers = step.registers.clone().expect("registers are computed");
            let bits = step.ref_bits.clone().expect("clock records reference bits");
            for (slot, page) in step.frames.iter().enumerate() {
                let Some(page) = page else {
                    continue;
                };
                let top = if bits[slot] { 0x80 } else { 0 };
                let expected = match previous.get(page) {
                    Some(r) => (r >> 1) | top,
                    None => top,
                };
                assert_eq!(expected, registers[page]);
            }
            assert_eq!(step.resident_count(), registers.len());
            previous = registers;
        }
    }
    Ok(())
}

#[test]
fn test_validated_input() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let req = validate::parse_disk_request("200", "53", "98 183 37 122 14 124 65 67")?;
    let result = DiskAlgorithm::CScan.schedule(&req.requests, req.head, req.disk_size);
    assert_eq!(382, result.total_seek);
    let result = DiskAlgorithm::CLook.schedule(&req.requests, req.head, req.disk_size);
    assert_eq!(322, result.total_seek);

    let references = validate::parse_references("7 0 1 2 0 3 0 4 2 3 0 3 2")?;
    let frame_count = validate::parse_frame_count("3")?;
    let trace = "Optimal".parse::<ReplacementPolicy>()?.simulate(&references, frame_count);
    assert_eq!(7, trace.page_faults());
    assert_eq!(6, trace.hits());
    Ok(())
}

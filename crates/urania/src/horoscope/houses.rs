use crate::ephemeris::types::{House, HouseCusps};
use crate::math::AngleSegment;
use crate::splitter::Splitter2D;

/// House ring built from consecutive cusps; the last house closes back
/// onto the first cusp.
pub fn house_ring(cusps: &HouseCusps) -> Splitter2D<House> {
    let count = cusps.cusps.len();
    cusps
        .cusps
        .iter()
        .enumerate()
        .filter_map(|(i, &start)| {
            let end = cusps.cusps[(i + 1) % count];
            let house = House::from_number(i as u8 + 1)?;
            Some((AngleSegment::new(start, end), house))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::Splitter;

    #[test]
    fn test_ring_wraps_last_house() {
        let cusps = HouseCusps {
            cusps: (0..12).map(|i| (100.0 + 30.0 * i as f64) % 360.0).collect(),
            ascendant: 100.0,
            midheaven: 10.0,
        };
        let ring = house_ring(&cusps);
        assert_eq!(ring.len(), 12);
        assert_eq!(ring.split(100.0, 0.0), Some(House::Identity1));
        assert_eq!(ring.split(95.0, 0.0), Some(House::Unconscious12));
        assert_eq!(ring.split(10.0, 0.0), Some(House::Ambition10));
    }
}

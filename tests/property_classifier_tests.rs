use kundali_rs::classify::dignity::{debilitation_sign, exaltation_sign, moolatrikona_band};
use kundali_rs::classify::{
    Dignity, angular_separation_deg, aspects_from, aspects_on_house, combustion_orb_deg, dignity_of,
    is_combust,
};
use kundali_rs::core::house::house_of_sign;
use kundali_rs::core::{Body, ChartData, HouseNumber, PlanetPosition, Rashi};
use proptest::prelude::*;

proptest! {
    #[test]
    fn exaltation_holds_through_the_whole_sign_except_mercury(degree in 0.0f64..30.0) {
        for body in Body::ALL {
            let Some(sign) = exaltation_sign(body) else { continue };
            if body == Body::Mercury {
                continue;
            }
            prop_assert_eq!(dignity_of(body, sign, degree), Dignity::Exalted);
        }
    }

    #[test]
    fn debilitation_holds_through_the_whole_opposite_sign(degree in 0.0f64..30.0) {
        for body in Body::ALL {
            let Some(sign) = debilitation_sign(body) else { continue };
            prop_assert_eq!(dignity_of(body, sign, degree), Dignity::Debilitated);
        }
    }

    #[test]
    fn mercury_in_virgo_splits_at_fifteen_and_twenty(degree in 0.0f64..30.0) {
        let expected = if degree < 15.0 {
            Dignity::Exalted
        } else if degree < 20.0 {
            Dignity::MoolaTrikona
        } else {
            Dignity::OwnSign
        };
        prop_assert_eq!(dignity_of(Body::Mercury, Rashi::Virgo, degree), expected);
    }

    #[test]
    fn nodes_and_shadow_points_never_gain_dignity(
        sign_index in 0u8..12,
        degree in 0.0f64..30.0
    ) {
        let sign = Rashi::from_index(sign_index);
        for body in [Body::Rahu, Body::Ketu, Body::Gulika, Body::Mandi] {
            prop_assert_eq!(dignity_of(body, sign, degree), Dignity::Neutral);
        }
    }

    #[test]
    fn moolatrikona_bands_refine_own_signs(degree in 0.0f64..30.0) {
        // Bodies whose band sign is not also their exaltation sign; the
        // band splits their own sign into moolatrikona and own tiers.
        for body in [Body::Sun, Body::Mars, Body::Jupiter, Body::Venus, Body::Saturn] {
            let (sign, start, end) = moolatrikona_band(body).expect("graha has a band");
            let expected = if degree >= start && degree < end {
                Dignity::MoolaTrikona
            } else {
                Dignity::OwnSign
            };
            prop_assert_eq!(dignity_of(body, sign, degree), expected);
        }
    }

    #[test]
    fn separation_is_symmetric_and_bounded(
        a in -720.0f64..720.0,
        b in -720.0f64..720.0
    ) {
        let forward = angular_separation_deg(a, b);
        let backward = angular_separation_deg(b, a);
        prop_assert!((forward - backward).abs() < 1e-9);
        prop_assert!((0.0..=180.0).contains(&forward));
        prop_assert!(angular_separation_deg(a, a) < 1e-9);
        prop_assert!((angular_separation_deg(a + 360.0, b) - forward).abs() < 1e-6);
    }

    #[test]
    fn combustion_follows_the_orb_table(
        sun_deg in 0.0f64..360.0,
        distance in 0.0f64..180.0,
        ahead in any::<bool>(),
        body_index in 0usize..11
    ) {
        let body = Body::ALL[body_index];
        prop_assume!(body != Body::Sun);

        let planet_deg = if ahead { sun_deg + distance } else { sun_deg - distance };
        let chart = ChartData::new(
            0.0,
            vec![
                PlanetPosition::new("Sun", sun_deg, false),
                PlanetPosition::new(body.name(), planet_deg, false),
            ],
        );
        let planet = chart.planet(body.name()).expect("planet present");

        let separation = angular_separation_deg(planet_deg, sun_deg);
        let expected = combustion_orb_deg(body).is_some_and(|orb| separation <= orb);
        prop_assert_eq!(is_combust(&chart, planet), expected);
    }

    #[test]
    fn the_sun_itself_never_burns(sun_deg in 0.0f64..360.0) {
        let chart = ChartData::new(0.0, vec![PlanetPosition::new("Sun", sun_deg, false)]);
        let sun = chart.planet("Sun").expect("sun present");
        prop_assert!(!is_combust(&chart, sun));
    }

    #[test]
    fn every_body_casts_the_universal_seventh_first(
        body_index in 0usize..11,
        seat_number in 1u8..13
    ) {
        let body = Body::ALL[body_index];
        let seat = HouseNumber::clamped(seat_number);
        let aspects = aspects_from(Some(body), seat);

        prop_assert!(!aspects.is_empty());
        prop_assert_eq!(aspects[0].target, seat.advance(6));
        prop_assert_eq!(aspects[0].label, "7th");

        for aspect in &aspects {
            let number = aspect.target.number();
            prop_assert!((1..=12).contains(&number));
            prop_assert!(aspect.target != seat);
        }
        // Distinct offsets mean distinct targets.
        for (i, a) in aspects.iter().enumerate() {
            for b in &aspects[i + 1..] {
                prop_assert!(a.target != b.target);
            }
        }
    }

    #[test]
    fn name_only_points_cast_only_the_seventh(seat_number in 1u8..13) {
        let seat = HouseNumber::clamped(seat_number);
        let aspects = aspects_from(None, seat);
        prop_assert_eq!(aspects.len(), 1);
        prop_assert_eq!(aspects[0].target, seat.advance(6));
    }

    #[test]
    fn reverse_scan_conserves_total_sightings(
        asc_deg in 0.0f64..360.0,
        longitudes in proptest::collection::vec(0.0f64..360.0, 0..10)
    ) {
        const NAMES: [&str; 9] = [
            "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu",
        ];
        let planets: Vec<PlanetPosition> = longitudes
            .iter()
            .take(NAMES.len())
            .enumerate()
            .map(|(i, &deg)| PlanetPosition::new(NAMES[i], deg, false))
            .collect();
        let chart = ChartData::new(asc_deg, planets);
        let ascendant = Rashi::from_longitude(asc_deg);

        let cast: usize = chart
            .planets
            .iter()
            .map(|planet| aspects_from(planet.body, house_of_sign(ascendant, planet.sign)).len())
            .sum();
        let found: usize = HouseNumber::ALL
            .into_iter()
            .map(|house| aspects_on_house(&chart, ascendant, house).len())
            .sum();
        prop_assert_eq!(found, cast);

        // A planet sights any single house at most once.
        for house in HouseNumber::ALL {
            let sightings = aspects_on_house(&chart, ascendant, house);
            for (i, a) in sightings.iter().enumerate() {
                for b in &sightings[i + 1..] {
                    prop_assert!(a.planet != b.planet);
                }
            }
        }
    }
}

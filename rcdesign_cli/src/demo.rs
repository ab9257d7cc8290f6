//! Built-in worked examples for `rcdesign demo`.

use rcdesign_core::calculations::continuous_beam::SpanSegment;
use rcdesign_core::calculations::{
    BeamDesignInput, BeamSection, BeamSpanInput, ColumnInput, ContinuousBeamInput, FootingInput, LoadCase,
    PredimensionInput, SeismicInput, SeismicZone, ShearInput, ShearVerificationInput, SoilProfile,
    SupportCondition,
};
use rcdesign_core::calculations::MaterialRequest;
use rcdesign_core::materials::{BarSize, MaterialInput};
use rcdesign_core::CalculationItem;

fn material() -> MaterialInput {
    MaterialInput { fc: 210.0, fy: 4200.0 }
}

pub fn items() -> Vec<CalculationItem> {
    let section = BeamSection::new(25.0, 54.0);

    vec![
        CalculationItem::Materials(MaterialRequest {
            label: "f'c 210 / fy 4200".to_string(),
            fc: 210.0,
            fy: 4200.0,
        }),
        CalculationItem::Predimension(PredimensionInput {
            label: "Frame 4x3".to_string(),
            span_m: 6.0,
            stories: 4,
            bays: 3,
            dead_load_kgf_m2: 500.0,
            live_load_kgf_m2: 250.0,
            material: material(),
        }),
        CalculationItem::BeamSpan(BeamSpanInput {
            label: "V-101".to_string(),
            span_m: 6.0,
            support: SupportCondition::Simple,
            load: LoadCase::uniform(2000.0).with_point(3000.0, 2.0),
        }),
        CalculationItem::BeamSpan(BeamSpanInput {
            label: "V-102".to_string(),
            span_m: 5.0,
            support: SupportCondition::FixedFixed,
            load: LoadCase::uniform(1200.0),
        }),
        CalculationItem::ContinuousBeam(ContinuousBeamInput {
            label: "VC-1".to_string(),
            spans: [SpanSegment::new(5.0, 1500.0), SpanSegment::new(5.0, 1500.0)],
        }),
        CalculationItem::BeamDesign(BeamDesignInput {
            label: "V-101".to_string(),
            material: material(),
            section,
            mu_kgf_cm: 1_500_000.0,
            vu_kgf: 12_000.0,
            stirrup: BarSize::No3,
        }),
        CalculationItem::Shear(ShearInput {
            label: "Vc check".to_string(),
            material: material(),
            section,
            vu_kgf: 6_000.0,
            stirrup: BarSize::No3,
        }),
        CalculationItem::ShearVerification(ShearVerificationInput {
            label: "V-103".to_string(),
            material: material(),
            section,
            vu_kgf: 15_000.0,
            span_m: 6.0,
            dead_load_kgf_m2: 3000.0,
            live_load_kgf_m2: 2000.0,
            stirrup: BarSize::No3,
            stirrup_count: Some(30),
        }),
        CalculationItem::Column(ColumnInput {
            label: "C-1".to_string(),
            material: material(),
            gross_area_cm2: 900.0,
            steel_area_cm2: 11.36,
            pu_kgf: 80_000.0,
            least_side_cm: Some(30.0),
            longitudinal_bar: BarSize::No6,
            tie_bar: BarSize::No3,
        }),
        CalculationItem::Footing(FootingInput {
            label: "Z-1".to_string(),
            material: material(),
            pu_kgf: 100_000.0,
            soil_capacity_kgf_cm2: 3.0,
            safety_factor: 3.0,
            column_side_cm: 25.0,
        }),
        CalculationItem::Seismic(SeismicInput {
            label: "Block A".to_string(),
            zone: SeismicZone::Z3,
            soil: SoilProfile::S2,
            importance_u: 1.0,
            weight_t: 500.0,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcdesign_core::{run_batch, DesignSettings};

    #[test]
    fn test_demo_items_all_run() {
        let items = items();
        for (item, result) in items.iter().zip(run_batch(&items, &DesignSettings::default())) {
            assert!(result.is_ok(), "{} failed: {:?}", item.label(), result);
        }
    }
}

//! Common eye conditions, as flat reference records.

use catalog_core::{
    CatalogRecord, CatalogResult, CategoryTag, DomainCollection, PlaceholderScan, QualityNote,
    QueryProfile, RecordCheck, SchemaViolation,
};
use serde::Serialize;

use crate::strings;

pub const COLLECTION: &str = "ophthalmology";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OphthalmicCategory {
    Glaucoma,
    Lens,
    Retina,
    Conjunctiva,
    Emergency,
}

impl CategoryTag for OphthalmicCategory {
    const ALL: &'static [Self] = &[
        Self::Glaucoma,
        Self::Lens,
        Self::Retina,
        Self::Conjunctiva,
        Self::Emergency,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Glaucoma => "glaucoma",
            Self::Lens => "lens",
            Self::Retina => "retina",
            Self::Conjunctiva => "conjunctiva",
            Self::Emergency => "emergency",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OphthalmicCondition {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub category: OphthalmicCategory,
    pub icd11: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_es: Option<String>,
    pub pathophysiology: String,
    pub symptoms: Vec<String>,
    pub risk_factors: Vec<String>,
    pub diagnostics: Vec<String>,
    pub treatment: Vec<String>,
    pub patient_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_explanation_es: Option<String>,
    pub emergency_signs: Vec<String>,
}

impl CatalogRecord for OphthalmicCondition {
    type Category = OphthalmicCategory;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> OphthalmicCategory {
        self.category
    }

    fn query_profile() -> QueryProfile<Self> {
        QueryProfile::<Self>::new("riskFactors", |c| c.risk_factors.as_slice())
            .text("name", |c| c.name.as_str())
            .text("nameEs", |c| c.name_es.as_str())
            .text("description", |c| c.description.as_str())
            .optional("descriptionEs", |c| c.description_es.as_deref())
            .text("pathophysiology", |c| c.pathophysiology.as_str())
            .list("symptoms", |c| c.symptoms.as_slice())
            .text("patientExplanation", |c| c.patient_explanation.as_str())
            .optional("patientExplanationEs", |c| c.patient_explanation_es.as_deref())
    }

    fn validate(&self) -> Result<(), SchemaViolation> {
        RecordCheck::for_id(&self.id)?
            .text("name", &self.name)?
            .text("nameEs", &self.name_es)?
            .icd11("icd11", &self.icd11)?
            .text("description", &self.description)?
            .optional_text("descriptionEs", self.description_es.as_deref())?
            .text("pathophysiology", &self.pathophysiology)?
            .list("symptoms", &self.symptoms)?
            .list("riskFactors", &self.risk_factors)?
            .list("diagnostics", &self.diagnostics)?
            .list("treatment", &self.treatment)?
            .text("patientExplanation", &self.patient_explanation)?
            .optional_text("patientExplanationEs", self.patient_explanation_es.as_deref())?
            .list("emergencySigns", &self.emergency_signs)?;
        Ok(())
    }

    fn quality_notes(&self) -> Vec<QualityNote> {
        PlaceholderScan::new()
            .text("description", &self.description)
            .optional("descriptionEs", self.description_es.as_deref())
            .text("pathophysiology", &self.pathophysiology)
            .list("symptoms", &self.symptoms)
            .list("riskFactors", &self.risk_factors)
            .list("diagnostics", &self.diagnostics)
            .list("treatment", &self.treatment)
            .text("patientExplanation", &self.patient_explanation)
            .optional("patientExplanationEs", self.patient_explanation_es.as_deref())
            .list("emergencySigns", &self.emergency_signs)
            .finish()
    }
}

pub fn collection() -> CatalogResult<DomainCollection<OphthalmicCondition>> {
    DomainCollection::new(COLLECTION, conditions())
}

fn conditions() -> Vec<OphthalmicCondition> {
    use OphthalmicCategory::*;

    vec![
        OphthalmicCondition {
            id: "open-angle-glaucoma".into(),
            name: "Primary Open-Angle Glaucoma".into(),
            name_es: "Glaucoma primario de ángulo abierto".into(),
            category: Glaucoma,
            icd11: "9C61.01".into(),
            description: "Chronic progressive optic neuropathy with characteristic cupping of the optic disc and peripheral vision loss, usually with an open drainage angle and raised intraocular pressure.".into(),
            description_es: Some("Neuropatía óptica crónica y progresiva con excavación del nervio óptico y pérdida de la visión periférica.".into()),
            pathophysiology: "Reduced aqueous outflow through the trabecular meshwork raises intraocular pressure, which together with impaired optic nerve perfusion causes apoptosis of retinal ganglion cells and thinning of the nerve fibre layer.".into(),
            symptoms: strings(&[
                "Usually asymptomatic in early stages",
                "Gradual loss of peripheral vision",
                "Tunnel vision in advanced disease",
                "Difficulty with night driving",
            ]),
            risk_factors: strings(&[
                "Elevated intraocular pressure",
                "Age over 60",
                "Family history of glaucoma",
                "African ancestry",
                "Thin central cornea",
                "High myopia",
            ]),
            diagnostics: strings(&[
                "Tonometry",
                "Gonioscopy to confirm an open angle",
                "Dilated optic disc examination",
                "Automated visual field testing",
                "OCT of the retinal nerve fibre layer",
            ]),
            treatment: strings(&[
                "Prostaglandin analogue eye drops (first-line)",
                "Beta-blocker, alpha-agonist or carbonic anhydrase inhibitor drops",
                "Selective laser trabeculoplasty",
                "Trabeculectomy or drainage device surgery for refractory disease",
            ]),
            patient_explanation: "Glaucoma slowly damages the nerve that connects your eye to your brain, often because the pressure inside the eye is too high. It steals side vision first and usually causes no pain, so regular eye checks and daily drops are the best protection.".into(),
            patient_explanation_es: Some("El glaucoma daña lentamente el nervio del ojo. Las gotas diarias y las revisiones regulares protegen la visión.".into()),
            emergency_signs: strings(&[
                "Sudden severe eye pain with headache and nausea (possible angle closure)",
                "Rapid loss of remaining visual field",
            ]),
        },
        OphthalmicCondition {
            id: "cataracts".into(),
            name: "Cataracts".into(),
            name_es: "Cataratas".into(),
            category: Lens,
            icd11: "9B10.0".into(),
            description: "Opacification of the crystalline lens causing progressive, painless vision loss. The most common cause of reversible blindness worldwide.".into(),
            description_es: Some("Opacidad del cristalino que causa pérdida progresiva e indolora de la visión.".into()),
            pathophysiology: "Oxidative damage and ageing cause lens crystallin proteins to denature and aggregate, scattering light. Nuclear, cortical and posterior subcapsular types differ in location and in their effect on glare and near focus.".into(),
            symptoms: strings(&[
                "Gradual painless blurring of vision",
                "Glare and halos around lights",
                "Faded colours",
                "Frequent changes in glasses prescription",
                "Monocular double vision",
            ]),
            risk_factors: strings(&[
                "Age",
                "Diabetes mellitus",
                "Smoking",
                "Long-term corticosteroid use",
                "Ultraviolet light exposure",
                "Previous eye trauma or surgery",
            ]),
            diagnostics: strings(&[
                "Visual acuity testing",
                "Slit-lamp biomicroscopy",
                "Dilated fundus examination to exclude posterior disease",
                "Optical biometry for surgical planning",
            ]),
            treatment: strings(&[
                "Updated refraction for early cataract",
                "Phacoemulsification with intraocular lens implantation",
            ]),
            patient_explanation: "The lens inside your eye slowly turns cloudy, like a window fogging up, so things look blurry and lights seem to glare. A short, safe operation replaces the cloudy lens with a clear artificial one.".into(),
            patient_explanation_es: Some("El cristalino se vuelve opaco como una ventana empañada. Una cirugía corta lo reemplaza por un lente artificial.".into()),
            emergency_signs: strings(&[
                "Sudden painful red eye with vision loss after cataract surgery (possible endophthalmitis)",
            ]),
        },
        OphthalmicCondition {
            id: "amd".into(),
            name: "Age-Related Macular Degeneration".into(),
            name_es: "Degeneración macular asociada a la edad".into(),
            category: Retina,
            icd11: "9B75.0".into(),
            description: "Degeneration of the macula in older adults that causes loss of central vision while peripheral vision is preserved. Occurs in dry (atrophic) and wet (neovascular) forms.".into(),
            description_es: None,
            pathophysiology: "Drusen accumulate between the retinal pigment epithelium and Bruch membrane. Complement-mediated inflammation and oxidative stress lead to geographic atrophy, or VEGF-driven choroidal neovascularisation that leaks and scars.".into(),
            symptoms: strings(&[
                "Blurred or distorted central vision",
                "Straight lines appear wavy (metamorphopsia)",
                "Dark or empty area in the centre of vision",
                "Difficulty reading and recognising faces",
            ]),
            risk_factors: strings(&[
                "Age over 50",
                "Smoking (strongest modifiable risk)",
                "Family history",
                "Complement factor H polymorphisms",
                "Cardiovascular disease",
                "Low dietary intake of antioxidants",
            ]),
            diagnostics: strings(&[
                "Amsler grid testing",
                "Dilated fundus examination",
                "Optical coherence tomography",
                "Fluorescein or OCT angiography for suspected wet AMD",
            ]),
            treatment: strings(&[
                "AREDS2 supplements for intermediate dry AMD",
                "Intravitreal anti-VEGF injections for wet AMD",
                "Smoking cessation",
                "Low-vision rehabilitation",
            ]),
            patient_explanation: "The macula is the tiny part of the back of the eye that lets you see fine detail. In macular degeneration it wears out, so the middle of what you look at becomes blurry or wavy while side vision stays. Stopping smoking and, for the wet form, eye injections can slow it down.".into(),
            patient_explanation_es: None,
            emergency_signs: strings(&[
                "Sudden new distortion or dark spot in central vision (possible conversion to wet AMD)",
            ]),
        },
        OphthalmicCondition {
            id: "diabetic-retinopathy".into(),
            name: "Diabetic Retinopathy".into(),
            name_es: "Retinopatía diabética".into(),
            category: Retina,
            icd11: "9B71.0".into(),
            description: "Microvascular complication of diabetes affecting the retinal vessels. A leading cause of vision loss in working-age adults.".into(),
            description_es: Some("Complicación microvascular de la diabetes que afecta los vasos de la retina.".into()),
            pathophysiology: "Chronic hyperglycaemia damages retinal capillaries through pericyte loss and basement membrane thickening, producing microaneurysms, leakage and ischaemia. Ischaemic retina releases VEGF, driving neovascularisation and macular oedema.".into(),
            symptoms: strings(&[
                "Often no symptoms until advanced",
                "Blurred vision from macular oedema",
                "Floaters from vitreous haemorrhage",
                "Fluctuating vision with blood sugar changes",
            ]),
            risk_factors: strings(&[
                "Long duration of diabetes",
                "Poor glycaemic control",
                "Hypertension",
                "Dyslipidaemia",
                "Pregnancy",
                "Smoking",
            ]),
            diagnostics: strings(&[
                "Annual dilated fundus examination",
                "Retinal photography screening",
                "OCT for macular oedema",
                "Fluorescein angiography",
                "HbA1c",
            ]),
            treatment: strings(&[
                "Optimise glucose, blood pressure and lipids",
                "Intravitreal anti-VEGF for macular oedema",
                "Panretinal photocoagulation for proliferative disease",
                "Vitrectomy for non-clearing haemorrhage or traction",
            ]),
            patient_explanation: "High blood sugar slowly harms the tiny blood vessels at the back of the eye. At first you may notice nothing, which is why yearly eye checks matter. Good sugar and blood pressure control, plus laser or injections when needed, protect your vision.".into(),
            patient_explanation_es: Some("El azúcar alto daña los vasos pequeños de la retina. Revise sus ojos cada año.".into()),
            emergency_signs: strings(&[
                "Sudden shower of floaters or loss of vision (vitreous haemorrhage)",
                "Curtain over part of the visual field (tractional detachment)",
            ]),
        },
        OphthalmicCondition {
            id: "retinal-detachment".into(),
            name: "Retinal Detachment".into(),
            name_es: "Desprendimiento de retina".into(),
            category: Emergency,
            icd11: "9B73".into(),
            description: "Separation of the neurosensory retina from the retinal pigment epithelium. A sight-threatening emergency that can cause permanent vision loss within hours to days.".into(),
            description_es: Some("Separación de la retina neurosensorial del epitelio pigmentario. Es una urgencia.".into()),
            pathophysiology: "A retinal break lets liquefied vitreous pass under the retina (rhegmatogenous). Less often, fibrovascular traction (tractional) or fluid leaking from the choroid (exudative) lifts the retina away from its blood supply.".into(),
            symptoms: strings(&[
                "Sudden onset of floaters",
                "Flashes of light (photopsia)",
                "Shadow or curtain moving across the vision",
                "Blurred central vision if the macula detaches",
            ]),
            risk_factors: strings(&[
                "High myopia",
                "Posterior vitreous detachment",
                "Previous cataract surgery",
                "Eye trauma",
                "Family history of detachment",
            ]),
            diagnostics: strings(&[
                "Dilated fundus examination with scleral depression",
                "B-scan ultrasonography if the view is obscured",
                "OCT to assess macular involvement",
            ]),
            treatment: strings(&[
                "Laser retinopexy for retinal tears without detachment",
                "Pneumatic retinopexy",
                "Scleral buckle",
                "Pars plana vitrectomy with gas or silicone oil",
            ]),
            patient_explanation: "The retina is the thin film at the back of the eye that senses light. If it peels away, it stops working, like wallpaper coming off a wall. New flashes, floaters or a dark curtain over your vision need same-day eye care.".into(),
            patient_explanation_es: Some("Si la retina se despega deja de funcionar. Destellos o una cortina oscura requieren atención el mismo día.".into()),
            emergency_signs: strings(&[
                "Sudden shower of floaters",
                "New flashes of light",
                "Dark curtain spreading across the field of view",
            ]),
        },
        OphthalmicCondition {
            id: "conjunctivitis".into(),
            name: "Conjunctivitis".into(),
            name_es: "Conjuntivitis".into(),
            category: Conjunctiva,
            icd11: "9A60".into(),
            description: "Inflammation of the conjunctiva, the clear membrane covering the white of the eye and lining the eyelids. Viral, bacterial and allergic causes are the most common.".into(),
            description_es: Some("Inflamación de la conjuntiva, la membrana que cubre la parte blanca del ojo.".into()),
            pathophysiology: "Infection or allergen exposure triggers conjunctival vessel dilation and inflammatory cell infiltration. Adenovirus is the usual viral cause; allergic disease is driven by IgE-mediated mast cell degranulation.".into(),
            symptoms: strings(&[
                "Red or pink eye",
                "Watery or sticky discharge",
                "Gritty, itchy or burning feeling",
                "Crusted eyelids on waking",
            ]),
            risk_factors: strings(&[
                "Close contact with an infected person",
                "Contact lens wear",
                "Seasonal allergies",
                "Poor hand hygiene",
            ]),
            diagnostics: strings(&[
                "Clinical examination",
                "Slit-lamp examination to exclude keratitis",
                "Swab for culture or PCR if severe or in neonates",
            ]),
            treatment: strings(&[
                "Cool compresses and lubricating drops",
                "Topical antibiotics for bacterial conjunctivitis",
                "Antihistamine or mast cell stabiliser drops for allergic conjunctivitis",
                "Hand washing and not sharing towels",
            ]),
            patient_explanation: "Pink eye is an irritation of the thin skin over the white of the eye. It is usually caused by a germ or an allergy and gets better on its own within a week or two. Wash your hands often and do not share towels.".into(),
            patient_explanation_es: Some("El ojo rosado suele mejorar solo en una o dos semanas. Lávese las manos con frecuencia.".into()),
            emergency_signs: strings(&[
                "Severe eye pain or strong sensitivity to light",
                "Contact lens wearer with a painful red eye (possible keratitis)",
                "Newborn with eye discharge",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: Vec<&OphthalmicCondition>) -> Vec<&str> {
        entries.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn cataracts_is_a_lens_condition() {
        let c = collection().expect("ophthalmology should build");
        let cataracts = c.get_by_id("cataracts").expect("cataracts is seeded");
        assert_eq!(cataracts.category, OphthalmicCategory::Lens);
        assert_eq!(cataracts.category.as_str(), "lens");
    }

    #[test]
    fn vision_search_finds_vision_loss_conditions_only() {
        let c = collection().expect("ophthalmology should build");
        let hits = ids(c.search("vision"));
        for expected in [
            "open-angle-glaucoma",
            "cataracts",
            "amd",
            "diabetic-retinopathy",
            "retinal-detachment",
        ] {
            assert!(hits.contains(&expected), "missing {expected}");
        }
        assert!(!hits.contains(&"conjunctivitis"));
    }

    #[test]
    fn placeholder_text_in_any_field_is_noted() {
        let c = collection().expect("ophthalmology should build");
        assert!(c.iter().all(|e| e.quality_notes().is_empty()));

        let mut draft = c.get_by_id("amd").expect("amd is seeded").clone();
        draft.treatment.push("TODO: anti-VEGF schedule".into());
        draft.description_es = Some("Pendiente (placeholder)".into());
        assert_eq!(
            draft.quality_notes(),
            vec![
                QualityNote::Placeholder {
                    field: "descriptionEs".into(),
                    marker: "placeholder".into(),
                },
                QualityNote::Placeholder {
                    field: format!("treatment[{}]", draft.treatment.len() - 1),
                    marker: "TODO".into(),
                },
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let c = collection().expect("ophthalmology should build");
        assert_eq!(ids(c.search("VISION")), ids(c.search("vision")));
        assert!(c.search("").is_empty());
    }

    #[test]
    fn only_retinal_detachment_is_an_emergency() {
        let c = collection().expect("ophthalmology should build");
        assert_eq!(ids(c.filter_by_category("emergency")), vec!["retinal-detachment"]);
        assert!(c.filter_by_category("cornea").is_empty());
    }

    #[test]
    fn six_conditions_are_seeded() {
        let c = collection().expect("ophthalmology should build");
        assert_eq!(c.count(), 6);
    }

    #[test]
    fn smoking_matches_risk_factor_prefix() {
        let c = collection().expect("ophthalmology should build");
        let hits = ids(c.filter_by_attribute("smoking"));
        assert!(hits.contains(&"amd"));
        assert!(hits.contains(&"cataracts"));
        assert!(!hits.contains(&"conjunctivitis"));
        assert_eq!(hits, ids(c.filter_by_attribute("SMOKING")));
    }

    #[test]
    fn categories_partition_the_collection() {
        let c = collection().expect("ophthalmology should build");
        let mut seen: Vec<&str> = OphthalmicCategory::ALL
            .iter()
            .flat_map(|&cat| c.filter_by(cat))
            .map(|e| e.id.as_str())
            .collect();
        seen.sort_unstable();
        let mut all: Vec<&str> = c.ids().collect();
        all.sort_unstable();
        assert_eq!(seen, all);
    }

    #[test]
    fn every_category_is_populated() {
        let c = collection().expect("ophthalmology should build");
        assert_eq!(c.available_categories(), OphthalmicCategory::ALL.to_vec());
    }
}

//! FHIR resource type vocabulary.
//!
//! The resource segment of a scope must name a resource type defined by the
//! FHIR release this crate was built for. The release is chosen with cargo
//! features; when several are enabled the priority order is R4 > R5.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// R4 resource types (4.0.1).
#[cfg(feature = "R4")]
const R4_RESOURCE_TYPES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "CatalogEntry",
    "ChargeItem",
    "ChargeItemDefinition",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceDefinition",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUseStatement",
    "DiagnosticReport",
    "DocumentManifest",
    "DocumentReference",
    "EffectEvidenceSynthesis",
    "Encounter",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "InsurancePlan",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "Measure",
    "MeasureReport",
    "Media",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProduct",
    "MedicinalProductAuthorization",
    "MedicinalProductContraindication",
    "MedicinalProductIndication",
    "MedicinalProductIngredient",
    "MedicinalProductInteraction",
    "MedicinalProductManufactured",
    "MedicinalProductPackaged",
    "MedicinalProductPharmaceutical",
    "MedicinalProductUndesirableEffect",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionOrder",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RelatedPerson",
    "RequestGroup",
    "ResearchDefinition",
    "ResearchElementDefinition",
    "ResearchStudy",
    "ResearchSubject",
    "RiskAssessment",
    "RiskEvidenceSynthesis",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "Substance",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SubstanceSpecification",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestReport",
    "TestScript",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

/// R5 resource types (5.0.0).
#[cfg(all(feature = "R5", not(feature = "R4")))]
const R5_RESOURCE_TYPES: &[&str] = &[
    "Account",
    "ActivityDefinition",
    "ActorDefinition",
    "AdministrableProductDefinition",
    "AdverseEvent",
    "AllergyIntolerance",
    "Appointment",
    "AppointmentResponse",
    "ArtifactAssessment",
    "AuditEvent",
    "Basic",
    "Binary",
    "BiologicallyDerivedProduct",
    "BiologicallyDerivedProductDispense",
    "BodyStructure",
    "Bundle",
    "CapabilityStatement",
    "CarePlan",
    "CareTeam",
    "ChargeItem",
    "ChargeItemDefinition",
    "Citation",
    "Claim",
    "ClaimResponse",
    "ClinicalImpression",
    "ClinicalUseDefinition",
    "CodeSystem",
    "Communication",
    "CommunicationRequest",
    "CompartmentDefinition",
    "Composition",
    "ConceptMap",
    "Condition",
    "ConditionDefinition",
    "Consent",
    "Contract",
    "Coverage",
    "CoverageEligibilityRequest",
    "CoverageEligibilityResponse",
    "DetectedIssue",
    "Device",
    "DeviceAssociation",
    "DeviceDefinition",
    "DeviceDispense",
    "DeviceMetric",
    "DeviceRequest",
    "DeviceUsage",
    "DiagnosticReport",
    "DocumentReference",
    "Encounter",
    "EncounterHistory",
    "Endpoint",
    "EnrollmentRequest",
    "EnrollmentResponse",
    "EpisodeOfCare",
    "EventDefinition",
    "Evidence",
    "EvidenceReport",
    "EvidenceVariable",
    "ExampleScenario",
    "ExplanationOfBenefit",
    "FamilyMemberHistory",
    "Flag",
    "FormularyItem",
    "GenomicStudy",
    "Goal",
    "GraphDefinition",
    "Group",
    "GuidanceResponse",
    "HealthcareService",
    "ImagingSelection",
    "ImagingStudy",
    "Immunization",
    "ImmunizationEvaluation",
    "ImmunizationRecommendation",
    "ImplementationGuide",
    "Ingredient",
    "InsurancePlan",
    "InventoryItem",
    "InventoryReport",
    "Invoice",
    "Library",
    "Linkage",
    "List",
    "Location",
    "ManufacturedItemDefinition",
    "Measure",
    "MeasureReport",
    "Medication",
    "MedicationAdministration",
    "MedicationDispense",
    "MedicationKnowledge",
    "MedicationRequest",
    "MedicationStatement",
    "MedicinalProductDefinition",
    "MessageDefinition",
    "MessageHeader",
    "MolecularSequence",
    "NamingSystem",
    "NutritionIntake",
    "NutritionOrder",
    "NutritionProduct",
    "Observation",
    "ObservationDefinition",
    "OperationDefinition",
    "OperationOutcome",
    "Organization",
    "OrganizationAffiliation",
    "PackagedProductDefinition",
    "Parameters",
    "Patient",
    "PaymentNotice",
    "PaymentReconciliation",
    "Permission",
    "Person",
    "PlanDefinition",
    "Practitioner",
    "PractitionerRole",
    "Procedure",
    "Provenance",
    "Questionnaire",
    "QuestionnaireResponse",
    "RegulatedAuthorization",
    "RelatedPerson",
    "RequestOrchestration",
    "Requirements",
    "ResearchStudy",
    "ResearchSubject",
    "RiskAssessment",
    "Schedule",
    "SearchParameter",
    "ServiceRequest",
    "Slot",
    "Specimen",
    "SpecimenDefinition",
    "StructureDefinition",
    "StructureMap",
    "Subscription",
    "SubscriptionStatus",
    "SubscriptionTopic",
    "Substance",
    "SubstanceDefinition",
    "SubstanceNucleicAcid",
    "SubstancePolymer",
    "SubstanceProtein",
    "SubstanceReferenceInformation",
    "SubstanceSourceMaterial",
    "SupplyDelivery",
    "SupplyRequest",
    "Task",
    "TerminologyCapabilities",
    "TestPlan",
    "TestReport",
    "TestScript",
    "Transport",
    "ValueSet",
    "VerificationResult",
    "VisionPrescription",
];

/// Lookup set over [`resource_type_names`], built on first use.
static RESOURCE_TYPE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| resource_type_names().iter().copied().collect());

/// Returns all resource type names for the enabled FHIR release, sorted
/// alphabetically.
///
/// Returns an empty slice when no release feature is enabled, in which case
/// only the wildcard resource can appear in a scope.
pub fn resource_type_names() -> &'static [&'static str] {
    #[cfg(feature = "R4")]
    let names = R4_RESOURCE_TYPES;

    #[cfg(all(feature = "R5", not(feature = "R4")))]
    let names = R5_RESOURCE_TYPES;

    #[cfg(not(any(feature = "R4", feature = "R5")))]
    let names: &'static [&'static str] = &[];

    names
}

/// Checks if a resource type name is valid for the enabled FHIR release.
///
/// The comparison is case-sensitive: `Patient` is a resource type,
/// `patient` is not.
///
/// # Example
///
/// ```rust
/// use helios_smart_scope::fhir_types::is_valid_resource_type;
///
/// assert!(is_valid_resource_type("Observation"));
/// assert!(!is_valid_resource_type("observation"));
/// ```
pub fn is_valid_resource_type(type_name: &str) -> bool {
    RESOURCE_TYPE_SET.contains(type_name)
}

/// Returns the FHIR version string for the enabled release.
pub fn fhir_version() -> &'static str {
    #[cfg(feature = "R4")]
    let version = "4.0.1";

    #[cfg(all(feature = "R5", not(feature = "R4")))]
    let version = "5.0.0";

    #[cfg(not(any(feature = "R4", feature = "R5")))]
    let version = "unknown";

    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(feature = "R4", feature = "R5"))]
    fn test_resource_type_names_sorted_and_unique() {
        let types = resource_type_names();
        assert!(!types.is_empty());
        assert!(types.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(RESOURCE_TYPE_SET.len(), types.len());
    }

    #[test]
    #[cfg(any(feature = "R4", feature = "R5"))]
    fn test_resource_type_names_include_common_types() {
        let types = resource_type_names();
        for name in ["Patient", "Observation", "Encounter", "Condition", "Bundle"] {
            assert!(types.contains(&name), "missing {name}");
        }
    }

    #[test]
    #[cfg(any(feature = "R4", feature = "R5"))]
    fn test_is_valid_resource_type() {
        assert!(is_valid_resource_type("Patient"));
        assert!(is_valid_resource_type("MedicationRequest"));

        assert!(!is_valid_resource_type("NotAResource"));
        assert!(!is_valid_resource_type(""));
        assert!(!is_valid_resource_type("*"));
        assert!(!is_valid_resource_type("patient")); // Case-sensitive
        assert!(!is_valid_resource_type(" Patient"));
    }

    #[test]
    #[cfg(not(any(feature = "R4", feature = "R5")))]
    fn test_no_release_enabled() {
        assert!(resource_type_names().is_empty());
        assert!(!is_valid_resource_type("Patient"));
        assert_eq!(fhir_version(), "unknown");
    }

    #[test]
    #[cfg(feature = "R4")]
    fn test_r4_specific_types() {
        // Removed in R5
        assert!(is_valid_resource_type("MedicinalProduct"));
        assert!(is_valid_resource_type("Media"));
        assert!(!is_valid_resource_type("ActorDefinition"));
        assert_eq!(fhir_version(), "4.0.1");
    }

    #[test]
    #[cfg(all(feature = "R5", not(feature = "R4")))]
    fn test_r5_specific_types() {
        assert!(is_valid_resource_type("ActorDefinition"));
        assert!(!is_valid_resource_type("Media"));
        assert_eq!(fhir_version(), "5.0.0");
    }
}

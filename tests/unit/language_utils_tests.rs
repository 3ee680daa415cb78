/*!
 * Tests for language utility functions
 */

use anyhow::Result;
use capbridge::language_utils::{
    get_language_name, language_codes_match, language_tags_match, normalize_to_part2t, primary_subtag,
    validate_language_code, validate_language_tag, LanguageCodeType,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("fr").unwrap(), LanguageCodeType::Part1);

    // ISO 639-2/T tests
    assert_eq!(validate_language_code("eng").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("deu").unwrap(), LanguageCodeType::Part2T);

    // ISO 639-2/B tests
    assert_eq!(validate_language_code("fre").unwrap(), LanguageCodeType::Part2B);
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);

    // Whitespace and case tests
    assert_eq!(validate_language_code(" EN ").unwrap(), LanguageCodeType::Part1);

    // Invalid codes
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("e").is_err());
    assert!(validate_language_code("").is_err());
}

#[test]
fn test_primarySubtag_withLocaleTags_shouldReturnLowercaseLanguage() {
    assert_eq!(primary_subtag("en-US"), "en");
    assert_eq!(primary_subtag("PT_br"), "pt");
    assert_eq!(primary_subtag("zh-Hant-TW"), "zh");
    assert_eq!(primary_subtag("fra"), "fra");
}

#[test]
fn test_validateLanguageTag_shouldCheckPrimarySubtagOnly() {
    assert_eq!(validate_language_tag("en-US").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_tag("ger-AT").unwrap(), LanguageCodeType::Part2B);
    assert!(validate_language_tag("12-US").is_err());
    assert!(validate_language_tag("").is_err());
}

#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() -> Result<()> {
    assert_eq!(normalize_to_part2t("en")?, "eng");
    assert_eq!(normalize_to_part2t("FRE")?, "fra");
    assert_eq!(normalize_to_part2t("deu")?, "deu");
    assert!(normalize_to_part2t("123").is_err());
    Ok(())
}

#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("fre", "fr"));
    assert!(!language_codes_match("en", "fr"));
    assert!(!language_codes_match("123", "123"));
}

#[test]
fn test_languageTagsMatch_withRegionVariants_shouldMatchOnLanguage() {
    assert!(language_tags_match("en-US", "en-GB"));
    assert!(language_tags_match("pt-BR", "por"));
    assert!(!language_tags_match("en-US", "fr-FR"));
}

#[test]
fn test_getLanguageName_withLocaleTag_shouldReturnEnglishName() -> Result<()> {
    assert_eq!(get_language_name("en-US")?, "English");
    assert_eq!(get_language_name("fr-CA")?, "French");
    assert!(get_language_name("!!").is_err());
    Ok(())
}

/*!
 * Tests for language utilities
 */

use doctwai::language_utils::{get_language_name, lookup_language, validate_language_code};

#[test]
fn test_validateLanguageCode_withTwoLetterCode_shouldPass() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("es").is_ok());
    assert!(validate_language_code("fr").is_ok());
}

#[test]
fn test_validateLanguageCode_withThreeLetterCode_shouldPass() {
    assert!(validate_language_code("eng").is_ok());
    assert!(validate_language_code("spa").is_ok());
}

#[test]
fn test_validateLanguageCode_withUnknownCode_shouldFail() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("zzz").is_err());
    assert!(validate_language_code("").is_err());
    assert!(validate_language_code("english").is_err());
}

#[test]
fn test_validateLanguageCode_withMixedCaseAndWhitespace_shouldNormalize() {
    assert!(validate_language_code(" EN ").is_ok());
    assert!(validate_language_code("Es").is_ok());
}

#[test]
fn test_getLanguageName_withValidCodes_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert_eq!(get_language_name("fr").unwrap(), "French");
}

#[test]
fn test_lookupLanguage_withEquivalentCodes_shouldAgree() {
    assert_eq!(
        lookup_language("en").unwrap(),
        lookup_language("eng").unwrap()
    );
}

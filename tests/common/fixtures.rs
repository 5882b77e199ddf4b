//! Test fixtures - reusable property file contents.

/// en-US defaults: two default sites and one restricted site
pub const EN_US_REGION: &str = "\
# LOCALIZATION NOTE: suggested sites
browser.suggestedsites.list.0=mozilla
browser.suggestedsites.list.1=fxaddons
browser.suggestedsites.restricted.list.0=restricted_fxsupport

browser.suggestedsites.mozilla.title=The Mozilla Project
browser.suggestedsites.mozilla.url=https://www.mozilla.org/en-US/
browser.suggestedsites.mozilla.bgcolor=#ce4e41

browser.suggestedsites.fxaddons.title=Add-ons: Customize Firefox
browser.suggestedsites.fxaddons.url=https://addons.mozilla.org/en-US/android/
browser.suggestedsites.fxaddons.bgcolor=#62be06

browser.suggestedsites.restricted_fxsupport.title=Firefox Help and Support
browser.suggestedsites.restricted_fxsupport.url=https://support.mozilla.org/en-US/products/mobile
browser.suggestedsites.restricted_fxsupport.bgcolor=#f37c00
";

/// A single default-list site
pub const SINGLE_SITE: &str = "\
browser.suggestedsites.list.0=mozilla
browser.suggestedsites.mozilla.title=The Mozilla Project
browser.suggestedsites.mozilla.url=https://www.mozilla.org/
browser.suggestedsites.mozilla.bgcolor=#ce4e41
";

/// French override of the mozilla site
pub const FR_REGION: &str = "\
browser.suggestedsites.mozilla.title=Le projet Mozilla
browser.suggestedsites.mozilla.url=https://www.mozilla.org/fr/
";

/// Lists an id whose namespace lacks `url`
pub const MISSING_URL: &str = "\
browser.suggestedsites.list.0=mozilla
browser.suggestedsites.mozilla.title=The Mozilla Project
browser.suggestedsites.mozilla.bgcolor=#ce4e41
";

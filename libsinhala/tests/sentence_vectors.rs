// Sentence-level vectors: full input sentences and their expected Sinhala output.
//
// Each vector runs through the default engine. Exact whitespace is part of
// the expected output.

use libsinhala::{translate, CurrencyStyle, Engine, SinhalaConfig};

#[test]
fn simple_sentence_going_home() {
    assert_eq!(
        translate("mama udhaeesanama gedhara yanavaa."),
        "මම උදෑසනම ගෙදර යනවා."
    );
}

#[test]
fn compound_sentence_with_conjunct() {
    assert_eq!(
        translate("api kadayakata yanavaa kaeema kanna saha passe api kattiyama chithrapatayak balanavaa."),
        "අපි කඩයකට යනවා කෑම කන්න සහ පස්සෙ අපි කට්ටියම චිත්\u{200D}රපටයක් බලනවා."
    );
}

#[test]
fn question_with_override() {
    assert_eq!(
        translate("oyaa maava balanna kavadhdha enna hithan inne?"),
        "ඔයා මාව බලන්න කවද්ද එන්න හිතන් ඉන්නේ?"
    );
}

#[test]
fn double_space_is_kept() {
    assert_eq!(
        translate("oyaa  apiva ekkan yanna kavadhdha enna hithan inne?"),
        "ඔයා  අපිව එක්කන් යන්න කවද්ද එන්න හිතන් ඉන්නේ?"
    );
}

#[test]
fn imperative() {
    assert_eq!(
        translate("vahaama gedhara enna."),
        "වහාම ගෙදර එන්න."
    );
}

#[test]
fn negation() {
    assert_eq!(
        translate("mama ehema hora vaeda karanne naehae."),
        "මම එහෙම හොර වැඩ කරන්නේ නැහැ."
    );
}

#[test]
fn retroflex_capitals() {
    assert_eq!(
        translate("karuNaakaralaa mata podi udhavvak karanna puLuvandha?"),
        "කරුණාකරලා මට පොඩි උදව්වක් කරන්න පුළුවන්ද?"
    );
}

#[test]
fn demonstratives() {
    assert_eq!(
        translate("oyaa meeka mee vidhata karapan."),
        "ඔයා මේක මේ විදට කරපන්."
    );
}

#[test]
fn present_continuous() {
    assert_eq!(
        translate("mama dhaen gedhara vaeda karanavaa."),
        "මම දැන් ගෙදර වැඩ කරනවා."
    );
}

#[test]
fn past_tense() {
    assert_eq!(
        translate("api iiyee gedhara giyaa."),
        "අපි ඊයේ ගෙදර ගියා."
    );
}

#[test]
fn capital_la_and_nga() {
    assert_eq!(
        translate("api iiLaGa sathiyee vinodha chaarikaavak gedhara kattiya ekka yamu."),
        "අපි ඊළඟ සතියේ විනොද චාරිකාවක් ගෙදර කට්ටිය එක්ක යමු."
    );
}

#[test]
fn sentence_initial_capital_havasa() {
    assert_eq!(
        translate("oyaalaa heta Havasa gaallee avoth apivath hambavenna enavadha?"),
        "ඔයාලා හෙට හවස ගාල්ලේ අවොත් අපිවත් හම්බවෙන්න එනවද?"
    );
}

#[test]
fn sentence_initial_capital_hari() {
    assert_eq!(
        translate("Hari hari oyaa kohomath mata vadaa adha lassanayi."),
        "හරි හරි ඔයා කොහොමත් මට වඩා අද ලස්සනයි."
    );
}

#[test]
fn run_together_words_segment() {
    assert_eq!(
        translate("mamagedharayanavaasikuradhaa."),
        "මමගෙදරයනවාසිකුරදා."
    );
}

#[test]
fn foreign_terms_inside_sentence() {
    assert_eq!(
        translate("heta mata zoom meeting ekak thiyenavaa ee nisaa mama adha havasa train ekee gedhara yanavaa."),
        "හෙට මට zoom meeting එකක් තියෙනවා ඒ නිසා මම අද හවස train එකේ ගෙදර යනවා."
    );
}

#[test]
fn place_name_kept() {
    assert_eq!(
        translate("apee panthiyee lamayi tika ekathu velaa Kandy valata trip ekak yamu."),
        "අපේ පන්තියේ ලමයි ටික එකතු වෙලා Kandy වලට trip එකක් යමු."
    );
}

#[test]
fn currency_amount_canonical() {
    assert_eq!(
        translate("Mata oyagen Rs. 5500 ganna ooni."),
        "මට ඔයගෙන් Rs.5500 ගන්න ඕනි."
    );
}

#[test]
fn clock_times_preserved() {
    assert_eq!(
        translate("Mata 7.30 AM meeting ekak thiyenavaa saha ee meeting eka 10.30 AM venakal thiyenavaa."),
        "මට 7.30 AM meeting එකක් තියෙනවා සහ ඒ meeting එක 10.30 AM වෙනකල් තියෙනවා."
    );
}

#[test]
fn multiple_spaces_everywhere() {
    assert_eq!(
        translate("mata  dhaen  vaedata  yanna  venavaa."),
        "මට  දැන්  වැඩට  යන්න  වෙනවා."
    );
}

#[test]
fn two_sentences() {
    assert_eq!(
        translate("mama gedhara yanavaa. oyaa enavadha?"),
        "මම ගෙදර යනවා. ඔයා එනවද?"
    );
}

#[test]
fn slang_with_exclamation() {
    assert_eq!(
        translate("eeka nice machan! supiri!"),
        "ඒක nice මචන්! සුපිරි!"
    );
}

#[test]
fn acronyms_and_tech_words() {
    assert_eq!(
        translate("mage number eka app ekata login vedhdhi dhunnahama OTP eka SMS ekakin enavaa."),
        "mage number එක app එකට login වෙද්දි දුන්නහම OTP එක SMS එකකින් එනවා."
    );
}

#[test]
fn long_paragraph() {
    assert_eq!(
        translate(" School kale apee panthiye pirimi  set eka udheema thiyena period eka maga haerala sellam karanna play ground ekata giyaa. passee kattiya ekathu velaa krikat match ekak gaehuvaa. kohoma hari paeyak vithara palaveni match eka gaehuvaa . passe api aayeth thava match ekak gahanna patan gaththaa. Ohoma dhevani match eka gagaha innakota eka paarama kohendhamandhaa panthiBhaara teacher play ground ekata aavaa. haebaeyi    aave nikan nemei vidhuhalpathithumath ekkamayi. Ekapaara eyaalaa  ground ekata aavaa vitharayi api passa balanne naethuva dhivvaa . kohoma hari panthiyee Lamayi tika eka eka thaenvala gihin haengunaa . maayi thava Lamayi ennekuyi apee school ekee toilet ekee haengunaa."),
        " School kale අපේ පන්තියෙ පිරිමි  සෙට් එක උදේම තියෙන period එක මග හැරල සෙල්ලම් කරන්න play ground එකට ගියා. පස්සේ කට්ටිය එකතු වෙලා ක්\u{200D}රිකට් match එකක් ගැහුවා. කොහොම හරි පැයක් විතර පලවෙනි match එක ගැහුවා . පස්සෙ අපි ආයෙත් තව match එකක් ගහන්න පටන් ගත්තා. ඔහොම දෙවනි match එක ගගහ ඉන්නකොට එක පාරම කොහෙන්දමන්දා පන්තිභාර teacher play ground එකට ආවා. හැබැයි    ආවෙ නිකන් නෙමේ විදුහල්පතිතුමත් එක්කමයි. එකපාර එයාලා  ground එකට ආවා විතරයි අපි පස්ස බලන්නෙ නැතුව දිව්වා . කොහොම හරි පන්තියේ ළමයි ටික එක එක තැන්වල ගිහින් හැන්ගුනා . මායි තව ළමයි එන්නෙකුයි අපේ school එකේ toilet එකේ හැන්ගුනා."
    );
}

#[test]
fn aspirated_capital_dh() {
    assert_eq!(
        translate("puluvannam mata eeka sambanDhava dheeval evanna."),
        "පුලුවන්නම් මට ඒක සම්බන්ධව දේවල් එවන්න."
    );
}

#[test]
fn request_then_plan() {
    assert_eq!(
        translate("karuNaakaralaa mata podi udhavvak karanna puLuvandha? mama aduma adha havasata report eka ivara karanna balannee."),
        "කරුණාකරලා මට පොඩි උදව්වක් කරන්න පුළුවන්ද? මම අඩුම අද හවසට report එක ඉවර කරන්න බලන්නේ."
    );
}

#[test]
fn currency_amount_preserved_when_configured() {
    let mut config = SinhalaConfig::default();
    config.currency_style = CurrencyStyle::Preserve;
    let engine = Engine::new(config).unwrap();
    assert_eq!(
        engine.translate("Mata oyagen Rs. 5500 ganna ooni."),
        "මට ඔයගෙන් Rs. 5500 ගන්න ඕනි."
    );
}

use crate::lang::LanguageTag;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the constants, the ordered table and the index
/// ---------------------------------------------------------------------------
macro_rules! define_language_tags {
    (@deprecated) => { false };
    (@deprecated deprecated) => { true };

    ($(
        $code:ident, $id_str:literal, $name:literal, $iso639:expr, $iso3:expr $(, $flag:ident)?
    );* $(;)?) => {
        // Public `LanguageTag` constants
        $(
            #[allow(non_upper_case_globals)]
            pub const $code: LanguageTag = LanguageTag::new(
                $id_str,
                $name,
                $iso639,
                $iso3,
                define_language_tags!(@deprecated $($flag)?),
            );
        )*

        /// Every row in declaration order.
        pub static ALL_LANGUAGE_TAGS: &[LanguageTag] = &[$($code),*];

        /// Identifier → row. `phf_map!` refuses duplicate keys, so a repeated
        /// identifier fails the build.
        pub static LANGUAGE_TAG_INDEX: Map<&'static str, LanguageTag> = phf_map! {
            $(
                $id_str => $code,
            )*
        };
    };
}

// ---------------------------------------------------------------------------
//    OpenType language system tags (ISO/IEC 14496-22:2015, pages 318 to 338)
//
//    The OpenType list has typos in its names and is coarser than ISO 639-3,
//    so `iso639_name` follows ISO 639-3 where the two disagree. A `0` suffix
//    marks a second language the registry spells with the same three letters.
// ---------------------------------------------------------------------------
define_language_tags! {
    ABA, "ABA", "Abaza", Some("Abaza"), "abq";
    ABK, "ABK", "Abkhazian", Some("Abkhazian"), "abk";
    ACH, "ACH", "Acholi", Some("Acoli"), "ach";
    ACR, "ACR", "Achi", Some("Achi"), "acr";
    ADY, "ADY", "Adyghe", Some("Adyghe"), "ady";
    AFK, "AFK", "Afrikaans", Some("Afrikaans"), "afr";
    AFR, "AFR", "Afar", Some("Afar"), "aar";
    AGW, "AGW", "Agaw", Some("Qimant"), "ahg";
    AIO, "AIO", "Aiton", Some("Aiton"), "aio";
    AKA, "AKA", "Akan", Some("Akan"), "aka";
    ALS, "ALS", "Alsatian", Some("Swiss German"), "gsw";
    ALT, "ALT", "Altai", None, "atv,alt";
    AMH, "AMH", "Amharic", Some("Amharic"), "amh";
    ANG, "ANG", "Anglo-Saxon", Some("Old English (ca. 450-1100)"), "ang";
    APPH, "APPH", "Phonetic transcription – Americanist conventions", None, "";
    ARA, "ARA", "Arabic", Some("Arabic"), "ara";
    ARG, "ARG", "Aragonese", Some("Aragonese"), "arg";
    ARI, "ARI", "Aari", Some("Aari"), "aiw";
    ARK, "ARK", "Rakhine", None, "mhv,rmz,rki";
    ASM, "ASM", "Assamese", Some("Assamese"), "asm";
    AST, "AST", "Asturian", Some("Asturian"), "ast";
    ATH, "ATH", "Athapaskan", None, concat!(
        "apk,apj,apl,apm,apw,nav,bea,sek,bcr,caf,",
        "crx,clc,gwi,haa,chp,dgr,scs,xsl,srs,ing,",
        "hoi,koy,hup,ktw,mvb,wlk,coq,ctc,gce,tol,",
        "tuu,kkz,tgx,tht,aht,tfn,taa,tau,tcb,kuu,",
        "tce,ttm,txc"
    );
    AVR, "AVR", "Avar", Some("Avaric"), "ava";
    AWA, "AWA", "Awadhi", Some("Awadhi"), "awa";
    AYM, "AYM", "Aymara", Some("Aymara"), "aym";
    AZB, "AZB", "Torki", Some("South Azerbaijani"), "azb";
    AZE, "AZE", "Azerbaijani", Some("Azerbaijani"), "aze";
    BAD, "BAD", "Badaga", Some("Badaga"), "bfq";
    BAD0, "BAD0", "Banda", None, "bad";
    BAG, "BAG", "Baghelkhandi", Some("Bagheli"), "bfy";
    BAL, "BAL", "Balkar", Some("Karachay-Balkar"), "krc";
    BAN, "BAN", "Balinese", Some("Balinese"), "ban";
    BAR, "BAR", "Bavarian", Some("Bavarian"), "bar";
    BAU, "BAU", "Baoulé", Some("Baoulé"), "bci";
    BBC, "BBC", "Batak Toba", Some("Batak Toba"), "bbc";
    BBR, "BBR", "Berber", None, "";
    BCH, "BCH", "Bench", Some("Bench"), "bcq";
    BCR, "BCR", "Bible Cree", None, "";
    BDY, "BDY", "Bandjalang", Some("Bandjalang"), "bdy";
    BEL, "BEL", "Belarusian", Some("Belarusian"), "bel";
    BEM, "BEM", "Bemba", Some("Bemba (Zambia)"), "bem";
    BEN, "BEN", "Bengali", Some("Bengali"), "ben";
    BGC, "BGC", "Haryanvi", Some("Haryanvi"), "bgc";
    BGQ, "BGQ", "Bagri", Some("Bagri"), "bgq";
    BGR, "BGR", "Bulgarian", Some("Bulgarian"), "bul";
    BHI, "BHI", "Bhili", None, "bhi,bhb";
    BHO, "BHO", "Bhojpuri", Some("Bhojpuri"), "bho";
    BIK, "BIK", "Bikol", None, "bik,bhk,bcl,bto,cts,bln";
    BIL, "BIL", "Bilen", Some("Bilin"), "byn";
    BIS, "BIS", "Bislama", Some("Bislama"), "bis";
    BJJ, "BJJ", "Kanauji", Some("Kanauji"), "bjj";
    BKF, "BKF", "Blackfoot", Some("Siksika"), "bla";
    BLI, "BLI", "Baluchi", Some("Baluchi"), "bal";
    BLK, "BLK", "Pa'o Karen", Some("Pa'o Karen"), "blk";
    BLN, "BLN", "Balante", None, "bjt,ble";
    BLT, "BLT", "Balti", Some("Balti"), "bft";
    BMB, "BMB", "Bambara (Bamanankan)", Some("Bambara"), "bam";
    BML, "BML", "Bamileke", None, "";
    BOS, "BOS", "Bosnian", Some("Bosnian"), "bos";
    BPY, "BPY", "Bishnupriya Manipuri", Some("Bishnupriya"), "bpy";
    BRE, "BRE", "Breton", Some("Breton"), "bre";
    BRH, "BRH", "Brahui", Some("Brahui"), "brh";
    BRI, "BRI", "Braj Bhasha", Some("Braj"), "bra";
    BRM, "BRM", "Burmese", Some("Burmese"), "mya";
    BRX, "BRX", "Bodo", Some("Bodo (India)"), "brx";
    BSH, "BSH", "Bashkir", Some("Bashkir"), "bak";
    BTI, "BTI", "Beti", None, "btb";
    BTS, "BTS", "Batak Simalungun", Some("Batak Simalungun"), "bts";
    BUG, "BUG", "Bugis", Some("Buginese"), "bug";
    CAK, "CAK", "Kaqchikel", Some("Kaqchikel"), "cak";
    CAT, "CAT", "Catalan", Some("Catalan"), "cat";
    CBK, "CBK", "Zamboanga Chavacano", Some("Chavacano"), "cbk";
    CEB, "CEB", "Cebuano", Some("Cebuano"), "ceb";
    CHE, "CHE", "Chechen", Some("Chechen"), "che";
    CHG, "CHG", "Chaha Gurage", Some("Sebat Bet Gurage"), "sgw";
    CHH, "CHH", "Chattisgarhi", Some("Chhattisgarhi"), "hne";
    CHI, "CHI", "Chichewa (Chewa, Nyanja)", Some("Nyanja"), "nya";
    CHK, "CHK", "Chukchi", Some("Chukot"), "ckt";
    CHK0, "CHK0", "Chuukese", Some("Chuukese"), "chk";
    CHO, "CHO", "Choctaw", Some("Choctaw"), "cho";
    CHP, "CHP", "Chipewyan", Some("Chipewyan"), "chp";
    CHR, "CHR", "Cherokee", Some("Cherokee"), "chr";
    CHA, "CHA", "Chamorro", Some("Chamorro"), "cha";
    CHU, "CHU", "Chuvash", Some("Chuvash"), "chv";
    CHY, "CHY", "Cheyenne", Some("Cheyenne"), "chy";
    CGG, "CGG", "Chiga", Some("Chiga"), "cgg";
    CMR, "CMR", "Comorian", None, "swb,wlc,wni,zdj";
    COP, "COP", "Coptic", Some("Coptic"), "cop";
    COR, "COR", "Cornish", Some("Cornish"), "cor";
    COS, "COS", "Corsican", Some("Corsican"), "cos";
    CPP, "CPP", "Creoles", None, "cpp";
    CRE, "CRE", "Cree", Some("Cree"), "cre";
    CRR, "CRR", "Carrier", None, "crx,caf";
    CRT, "CRT", "Crimean Tatar", Some("Crimean Tatar"), "crh";
    CSB, "CSB", "Kashubian", Some("Kashubian"), "csb";
    CSL, "CSL", "Church Slavonic", Some("Church Slavic"), "chu";
    CSY, "CSY", "Czech", Some("Czech"), "ces";
    CTG, "CTG", "Chittagonian", Some("Chittagonian"), "ctg";
    CUK, "CUK", "San Blas Kuna", Some("San Blas Kuna"), "cuk";
    DAN, "DAN", "Danish", Some("Danish"), "dan";
    DAR, "DAR", "Dargwa", Some("Dargwa"), "dar";
    DAX, "DAX", "Dayi", Some("Dayi"), "dax";
    DCR, "DCR", "Woods Cree", Some("Woods Cree"), "cwd";
    DEU, "DEU", "German", Some("German"), "deu";
    DGO, "DGO", "Dogri", Some("Dogri (individual language)"), "dgo";
    DGR, "DGR", "Dogri", Some("Dogri (macrolanguage)"), "doi";
    DHG, "DHG", "Dhangu", Some("Dhangu-Djangu"), "dhg";
    DHV, "DHV", "Divehi (Dhivehi, Maldivian)", Some("Dhivehi"), "div", deprecated;
    DIQ, "DIQ", "Dimli", Some("Dimli (individual language)"), "diq";
    DIV, "DIV", "Divehi (Dhivehi, Maldivian)", Some("Dhivehi"), "div";
    DJR, "DJR", "Zarma", Some("Zarma"), "dje";
    DJR0, "DJR0", "Djambarrpuyngu", Some("Djambarrpuyngu"), "djr";
    DNG, "DNG", "Dangme", Some("Adangme"), "ada";
    DNJ, "DNJ", "Dan", Some("Dan"), "dnj";
    DNK, "DNK", "Dinka", Some("Dinka"), "din";
    DRI, "DRI", "Dari", Some("Dari"), "prs";
    DUJ, "DUJ", "Dhuwal", None, "duj";
    DUN, "DUN", "Dungan", Some("Dungan"), "dng";
    DZN, "DZN", "Dzongkha", Some("Dzongkha"), "dzo";
    EBI, "EBI", "Ebira", Some("Ebira"), "igb";
    ECR, "ECR", "Eastern Cree", None, "crj,crl";
    EDO, "EDO", "Edo", Some("Bini"), "bin";
    EFI, "EFI", "Efik", Some("Efik"), "efi";
    ELL, "ELL", "Greek", Some("Modern Greek (1453-)"), "ell";
    EMK, "EMK", "Eastern Maninkakan", Some("Eastern Maninkakan"), "emk";
    ENG, "ENG", "English", Some("English"), "eng";
    ERZ, "ERZ", "Erzya", Some("Erzya"), "myv";
    ESP, "ESP", "Spanish", Some("Spanish"), "spa";
    ESU, "ESU", "Central Yupik", Some("Central Yupik"), "esu";
    ETI, "ETI", "Estonian", Some("Estonian"), "est";
    EUQ, "EUQ", "Basque", Some("Basque"), "eus";
    EVK, "EVK", "Evenki", Some("Evenki"), "evn";
    EVN, "EVN", "Even", Some("Even"), "eve";
    EWE, "EWE", "Ewe", Some("Ewe"), "ewe";
    FAN, "FAN", "French Antillean", Some("Saint Lucian Creole French"), "acf";
    FAN0, "FAN0", "Fang", Some("Fang (Equatorial Guinea)"), "fan";
    FAR, "FAR", "Persian", Some("Persian"), "fas";
    FAT, "FAT", "Fanti", Some("Fanti"), "fat";
    FIN, "FIN", "Finnish", Some("Finnish"), "fin";
    FJI, "FJI", "Fijian", Some("Fijian"), "fij";
    FLE, "FLE", "Dutch (Flemish)", Some("Vlaams"), "vls";
    FNE, "FNE", "Forest Nenets", Some("Forest Enets"), "enf";
    FON, "FON", "Fon", Some("Fon"), "fon";
    FOS, "FOS", "Faroese", Some("Faroese"), "fao";
    FRA, "FRA", "French", Some("French"), "fra";
    FRC, "FRC", "Cajun French", Some("Cajun French"), "frc";
    FRI, "FRI", "Frisian", Some("Western Frisian"), "fry";
    FRL, "FRL", "Friulian", Some("Friulian"), "fur";
    FRP, "FRP", "Arpitan", Some("Arpitan"), "frp";
    FTA, "FTA", "Futa", Some("Pular"), "fuf";
    FUL, "FUL", "Fulah", Some("Fulah"), "ful";
    FUV, "FUV", "Nigerian Fulfulde", Some("Nigerian Fulfulde"), "fuv";
    GAD, "GAD", "Ga", Some("Ga"), "gaa";
    GAE, "GAE", "Scottish Gaelic (Gaelic)", Some("Scottish Gaelic"), "gla";
    GAG, "GAG", "Gagauz", Some("Gagauz"), "gag";
    GAL, "GAL", "Galician", Some("Galician"), "glg";
    GAR, "GAR", "Garshuni", None, "";
    GAW, "GAW", "Garhwali", Some("Garhwali"), "gbm";
    GEZ, "GEZ", "Ge'ez", Some("Geez"), "gez";
    GIH, "GIH", "Githabul", Some("Githabul"), "gih";
    GIL, "GIL", "Gilyak", Some("Gilyak"), "niv";
    GIL0, "GIL0", "Kiribati (Gilbertese)", Some("Gilbertese"), "gil";
    GKP, "GKP", "Kpelle (Guinea)", Some("Guinea Kpelle"), "gkp";
    GLK, "GLK", "Gilaki", Some("Gilaki"), "glk";
    GMZ, "GMZ", "Gumuz", Some("Gumuz"), "guk";
    GNN, "GNN", "Gumatj", Some("Gumatj"), "gnn";
    GOG, "GOG", "Gogo", Some("Gogo"), "gog";
    GON, "GON", "Gondi", None, "gon,gno,ggo";
    GRN, "GRN", "Greenlandic", Some("Kalaallisut"), "kal";
    GRO, "GRO", "Garo", Some("Garo"), "grt";
    GUA, "GUA", "Guarani", Some("Guarani"), "grn";
    GUC, "GUC", "Wayuu", Some("Wayuu"), "guc";
    GUF, "GUF", "Gupapuyngu", Some("Gupapuyngu"), "guf";
    GUJ, "GUJ", "Gujarati", Some("Gujarati"), "guj";
    GUZ, "GUZ", "Gusii", Some("Gusii"), "guz";
    HAI, "HAI", "Haitian (Haitian Creole)", Some("Haitian"), "hat";
    HAL, "HAL", "Halam", None, "flm";
    HAR, "HAR", "Harauti", Some("Hadothi"), "hoj";
    HAU, "HAU", "Hausa", Some("Hausa"), "hau";
    HAW, "HAW", "Hawaiian", Some("Hawaiian"), "haw";
    HAY, "HAY", "Haya", Some("Haya"), "hay";
    HAZ, "HAZ", "Hazaragi", Some("Hazaragi"), "haz";
    HBN, "HBN", "Hammer-Banna", Some("Hamer-Banna"), "amf";
    HER, "HER", "Herero", Some("Herero"), "her";
    HIL, "HIL", "Hiligaynon", Some("Hiligaynon"), "hil";
    HIN, "HIN", "Hindi", Some("Hindi"), "hin";
    HMA, "HMA", "High Mari", Some("Western Mari"), "mrj";
    HMN, "HMN", "Hmong", Some("Hmong"), "hmn";
    HMO, "HMO", "Hiri Motu", Some("Hiri Motu"), "hmo";
    HND, "HND", "Hindko", None, "hno,hnd";
    HO, "HO", "Ho", Some("Ho"), "hoc";
    HRI, "HRI", "Harari", Some("Harari"), "har";
    HRV, "HRV", "Croatian", Some("Croatian"), "hrv";
    HUN, "HUN", "Hungarian", Some("Hungarian"), "hun";
    HYE, "HYE", "Armenian", Some("Armenian"), "hye";
    HYE0, "HYE0", "Armenian East", Some("Armenian"), "hye";
    IBA, "IBA", "Iban", Some("Iban"), "iba";
    IBB, "IBB", "Ibibio", Some("Ibibio"), "ibb";
    IBO, "IBO", "Igbo", Some("Igbo"), "ibo";
    IJO, "IJO", "Ijo languages", Some("Izon"), "ijc";
    IDO, "IDO", "Ido", Some("Ido"), "ido";
    ILE, "ILE", "Interlingue", Some("Interlingue"), "ile";
    ILO, "ILO", "Ilokano", Some("Iloko"), "ilo";
    INA, "INA", "Interlingua", Some("Interlingua (International Auxiliary Language Association)"), "ina";
    IND, "IND", "Indonesian", Some("Indonesian"), "ind";
    ING, "ING", "Ingush", Some("Ingush"), "inh";
    INU, "INU", "Inuktitut", Some("Inuktitut"), "iku";
    IPK, "IPK", "Inupiat", Some("Inupiaq"), "ipk";
    IPPH, "IPPH", "Phonetic transcription – IPA conventions", None, "";
    IRI, "IRI", "Irish", Some("Irish"), "gle";
    IRT, "IRT", "Irish Traditional", Some("Irish"), "gle";
    ISL, "ISL", "Icelandic", Some("Icelandic"), "isl";
    ISM, "ISM", "Inari Sami", Some("Inari Sami"), "smn";
    ITA, "ITA", "Italian", Some("Italian"), "ita";
    IWR, "IWR", "Hebrew", Some("Hebrew"), "heb";
    JAV, "JAV", "Javanese", Some("Javanese"), "jav";
    JII, "JII", "Yiddish", Some("Yiddish"), "yid";
    JAM, "JAM", "Jamaican Creole", Some("Jamaican Creole English"), "jam";
    JAN, "JAN", "Japanese", Some("Japanese"), "jpn";
    JBO, "JBO", "Lojban", Some("Lojban"), "jbo";
    JUD, "JUD", "Ladino", Some("Ladino"), "lad";
    JUL, "JUL", "Jula", Some("Dyula"), "dyu";
    KAB, "KAB", "Kabardian", Some("Kabardian"), "kbd";
    KAB0, "KAB0", "Kabyle", Some("Kabyle"), "kab";
    KAC, "KAC", "Kachchi", Some("Kachhi"), "kfr";
    KAL, "KAL", "Kalenjin", Some("Kalenjin"), "kln";
    KAN, "KAN", "Kannada", Some("Kannada"), "kan";
    KAR, "KAR", "Karachay", Some("Karachay-Balkar"), "krc";
    KAT, "KAT", "Georgian", Some("Georgian"), "kat";
    KAZ, "KAZ", "Kazakh", Some("Kazakh"), "kaz";
    KDE, "KDE", "Makonde", Some("Makonde"), "kde";
    KEA, "KEA", "Kabuverdianu (Crioulo)", Some("Kabuverdianu"), "kea";
    KEB, "KEB", "Kebena", Some("Kambaata"), "ktb";
    KEK, "KEK", "Kekchi", Some("Kekchí"), "kek";
    KGE, "KGE", "Khutsuri Georgian", Some("Georgian"), "kat";
    KHA, "KHA", "Khakass", Some("Khakas"), "kjh";
    KHK, "KHK", "Khanty-Kazim", Some("Khanty"), "kca";
    KHM, "KHM", "Khmer", Some("Central Khmer"), "khm";
    KHS, "KHS", "Khanty-Shurishkar", Some("Khanty"), "kca";
    KHT, "KHT", "Khamti Shan", Some("Khamti"), "kht";
    KHV, "KHV", "Khanty-Vakhi", Some("Khanty"), "kca";
    KHW, "KHW", "Khowar", Some("Khowar"), "khw";
    KIK, "KIK", "Kikuyu (Gikuyu)", Some("Kikuyu"), "kik";
    KIR, "KIR", "Kirghiz (Kyrgyz)", Some("Kirghiz"), "kir";
    KIS, "KIS", "Kisii", None, "kqs,kss";
    KIU, "KIU", "Kirmanjki", Some("Kirmanjki (individual language)"), "kiu";
    KJD, "KJD", "Southern Kiwai", Some("Southern Kiwai"), "kjd";
    KJP, "KJP", "Eastern Pwo Karen", Some("Pwo Eastern Karen"), "kjp";
    KKN, "KKN", "Kokni", Some("Kukna"), "kex";
    KLM, "KLM", "Kalmyk", Some("Kalmyk"), "xal";
    KMB, "KMB", "Kamba", Some("Kamba (Kenya)"), "kam";
    KMN, "KMN", "Kumaoni", Some("Kumaoni"), "kfy";
    KMO, "KMO", "Komo", Some("Komo (Democratic Republic of Congo)"), "kmw";
    KMS, "KMS", "Komso", Some("Konso"), "kxc";
    KNR, "KNR", "Kanuri", Some("Kanuri"), "kau";
    KOD, "KOD", "Kodagu", Some("Kodava"), "kfa";
    KOH, "KOH", "Korean Old Hangul", Some("Middle Korean (10th-16th cent.)"), "okm";
    KOK, "KOK", "Konkani", Some("Konkani (macrolanguage)"), "kok";
    KON, "KON", "Kikongo", Some("Kituba (Democratic Republic of Congo)"), "ktu";
    KON0, "KON0", "Kongo", Some("Kongo"), "kon";
    KOM, "KOM", "Komi", Some("Komi"), "kom";
    KOP, "KOP", "Komi-Permyak", Some("Komi-Permyak"), "koi";
    KOR, "KOR", "Korean", Some("Korean"), "kor";
    KOS, "KOS", "Kosraean", Some("Kosraean"), "kos";
    KOZ, "KOZ", "Komi-Zyrian", Some("Komi-Zyrian"), "kpv";
    KPL, "KPL", "Kpelle", Some("Kpelle"), "kpe";
    KRI, "KRI", "Krio", Some("Krio"), "kri";
    KRK, "KRK", "Karakalpak", Some("Kara-Kalpak"), "kaa";
    KRL, "KRL", "Karelian", Some("Karelian"), "krl";
    KRM, "KRM", "Karaim", Some("Karaim"), "kdr";
    KRN, "KRN", "Karen", None, "kar";
    KRT, "KRT", "Koorete", Some("Koorete"), "kqy";
    KSH, "KSH", "Kashmiri", Some("Kashmiri"), "kas";
    KSH0, "KSH0", "Ripuarian", Some("Kölsch"), "ksh";
    KSI, "KSI", "Khasi", Some("Khasi"), "kha";
    KSM, "KSM", "Kildin Sami", Some("Kildin Sami"), "sjd";
    KSW, "KSW", "S’gaw Karen", Some("S'gaw Karen"), "ksw";
    KUA, "KUA", "Kuanyama", Some("Kuanyama"), "kua";
    KUI, "KUI", "Kui", Some("Kui (India)"), "kxu";
    KUL, "KUL", "Kulvi", Some("Kullu Pahari"), "kfx";
    KUM, "KUM", "Kumyk", Some("Kumyk"), "kum";
    KUR, "KUR", "Kurdish", Some("Kurdish"), "kur";
    KUU, "KUU", "Kurukh", Some("Kurukh"), "kru";
    KUY, "KUY", "Kuy", Some("Kuy"), "kdt";
    KYK, "KYK", "Koryak", Some("Koryak"), "kpy";
    KYU, "KYU", "Western Kayah", Some("Western Kayah"), "kyu";
    LAD, "LAD", "Ladin", Some("Ladin"), "lld";
    LAH, "LAH", "Lahuli", Some("Gahri"), "bfu";
    LAK, "LAK", "Lak", Some("Lak"), "lbe";
    LAM, "LAM", "Lambani", Some("Lambadi"), "lmn";
    LAO, "LAO", "Lao", Some("Lao"), "lao";
    LAT, "LAT", "Latin", Some("Latin"), "lat";
    LAZ, "LAZ", "Laz", Some("Laz"), "lzz";
    LCR, "LCR", "L-Cree", Some("Moose Cree"), "crm";
    LDK, "LDK", "Ladakhi", Some("Ladakhi"), "lbj";
    LEZ, "LEZ", "Lezgi", Some("Lezghian"), "lez";
    LIJ, "LIJ", "Ligurian", Some("Ligurian"), "lij";
    LIM, "LIM", "Limburgish", Some("Limburgan"), "lim";
    LIN, "LIN", "Lingala", Some("Lingala"), "lin";
    LIS, "LIS", "Lisu", Some("Lisu"), "lis";
    LJP, "LJP", "Lampung", Some("Lampung Api"), "ljp";
    LKI, "LKI", "Laki", Some("Laki"), "lki";
    LMA, "LMA", "Low Mari", Some("Eastern Mari"), "mhr";
    LMB, "LMB", "Limbu", Some("Limbu"), "lif";
    LMO, "LMO", "Lombard", Some("Lombard"), "lmo";
    LMW, "LMW", "Lomwe", Some("Lomwe"), "ngl";
    LOM, "LOM", "Loma", Some("Loma (Liberia)"), "lom";
    LRC, "LRC", "Luri", None, "lrc,luz,bqi,zum";
    LSB, "LSB", "Lower Sorbian", Some("Lower Sorbian"), "dsb";
    LSM, "LSM", "Lule Sami", Some("Lule Sami"), "smj";
    LTH, "LTH", "Lithuanian", Some("Lithuanian"), "lit";
    LTZ, "LTZ", "Luxembourgish", Some("Luxembourgish"), "ltz";
    LUA, "LUA", "Luba-Lulua", Some("Luba-Lulua"), "lua";
    LUB, "LUB", "Luba-Katanga", Some("Luba-Katanga"), "lub";
    LUG, "LUG", "Ganda", Some("Ganda"), "lug";
    LUH, "LUH", "Luyia", Some("Luyia"), "luy";
    LUO, "LUO", "Luo", Some("Luo (Kenya and Tanzania)"), "luo";
    LVI, "LVI", "Latvian", Some("Latvian"), "lav";
    MAD, "MAD", "Madura", Some("Madurese"), "mad";
    MAG, "MAG", "Magahi", Some("Magahi"), "mag";
    MAH, "MAH", "Marshallese", Some("Marshallese"), "mah";
    MAJ, "MAJ", "Majang", Some("Majang"), "mpe";
    MAK, "MAK", "Makhuwa", Some("Makhuwa"), "vmw";
    MAL, "MAL", "Malayalam Traditional", Some("Malayalam"), "mal";
    MAM, "MAM", "Mam", Some("Mam"), "mam";
    MAN, "MAN", "Mansi", Some("Mansi"), "mns";
    MAP, "MAP", "Mapudungun", Some("Mapudungun"), "arn";
    MAR, "MAR", "Marathi", Some("Marathi"), "mar";
    MAW, "MAW", "Marwari", None, "mwr,dhd,rwr,mve,wry,mtr,swv";
    MBN, "MBN", "Mbundu", Some("Kimbundu"), "kmb";
    MCH, "MCH", "Manchu", Some("Manchu"), "mnc";
    MCR, "MCR", "Moose Cree", Some("Moose Cree"), "crm";
    MDE, "MDE", "Mende", Some("Mende (Sierra Leone)"), "men";
    MDR, "MDR", "Mandar", Some("Mandar"), "mdr";
    MEN, "MEN", "Me'en", Some("Me'en"), "mym";
    MER, "MER", "Meru", Some("Meru"), "mer";
    MFE, "MFE", "Morisyen", Some("Morisyen"), "mfe";
    MIN, "MIN", "Minangkabau", Some("Minangkabau"), "min";
    MIZ, "MIZ", "Mizo", Some("Lushai"), "lus";
    MKD, "MKD", "Macedonian", Some("Macedonian"), "mkd";
    MKR, "MKR", "Makasar", Some("Makasar"), "mak";
    MKW, "MKW", "Kituba", Some("Kituba (Congo)"), "mkw";
    MLE, "MLE", "Male", Some("Male (Ethiopia)"), "mdy";
    MLG, "MLG", "Malagasy", Some("Malagasy"), "mlg";
    MLN, "MLN", "Malinke", Some("Western Maninkakan"), "mlq";
    MLR, "MLR", "Malayalam Reformed", Some("Malayalam"), "mal";
    MLY, "MLY", "Malay", Some("Malay (macrolanguage)"), "msa";
    MND, "MND", "Mandinka", Some("Mandinka"), "mnk";
    MNG, "MNG", "Mongolian", Some("Mongolian"), "mon";
    MNI, "MNI", "Manipuri", Some("Manipuri"), "mni";
    MNK, "MNK", "Maninka", None, "man,mnk,myq,mku,msc,emk,mwk,mlq";
    MNX, "MNX", "Manx", Some("Manx"), "glv";
    // ISO/IEC 14496-22:2015 prints this code as "mho".
    MOH, "MOH", "Mohawk", Some("Mohawk"), "moh";
    MOK, "MOK", "Moksha", Some("Moksha"), "mdf";
    MOL, "MOL", "Moldavian", None, "mol";
    MON, "MON", "Mon", Some("Mon"), "mnw";
    MOR, "MOR", "Moroccan", None, "";
    MOS, "MOS", "Mossi", Some("Mossi"), "mos";
    MRI, "MRI", "Maori", Some("Maori"), "mri";
    MTH, "MTH", "Maithili", Some("Maithili"), "mai";
    MTS, "MTS", "Maltese", Some("Maltese"), "mlt";
    MUN, "MUN", "Mundari", Some("Mundari"), "unr";
    MUS, "MUS", "Muscogee", Some("Creek"), "mus";
    MWL, "MWL", "Mirandese", Some("Mirandese"), "mwl";
    MWW, "MWW", "Hmong Daw", Some("Hmong Daw"), "mww";
    MYN, "MYN", "Mayan", None, "myn";
    MZN, "MZN", "Mazanderani", Some("Mazanderani"), "mzn";
    NAG, "NAG", "Naga-Assamese", Some("Naga Pidgin"), "nag";
    NAH, "NAH", "Nahuatl", None, "nah";
    NAN, "NAN", "Nanai", Some("Nanai"), "gld";
    NAP, "NAP", "Neapolitan", Some("Neapolitan"), "nap";
    NAS, "NAS", "Naskapi", Some("Naskapi"), "nsk";
    NAU, "NAU", "Nauruan", Some("Nauru"), "nau";
    NAV, "NAV", "Navajo", Some("Navajo"), "nav";
    NCR, "NCR", "N-Cree", Some("Swampy Cree"), "csw";
    NDB, "NDB", "Ndebele", None, "nbl,nde";
    NDC, "NDC", "Ndau", Some("Ndau"), "ndc";
    NDG, "NDG", "Ndonga", Some("Ndonga"), "ndo";
    NDS, "NDS", "Low Saxon", Some("Low German"), "nds";
    NEP, "NEP", "Nepali", Some("Nepali (macrolanguage)"), "nep";
    NEW, "NEW", "Newari", Some("Newari"), "new";
    NGA, "NGA", "Ngbaka", Some("Ngbaka"), "nga";
    NGR, "NGR", "Nagari", None, "";
    NHC, "NHC", "Norway House Cree", Some("Swampy Cree"), "csw";
    NIS, "NIS", "Nisi", None, "dap";
    NIU, "NIU", "Niuean", Some("Niuean"), "niu";
    NKL, "NKL", "Nyankole", Some("Nyankole"), "nyn";
    // ISO/IEC 14496-22:2015 prints this code as "ngo".
    NKO, "NKO", "N'Ko", Some("N'ko"), "nqo";
    NLD, "NLD", "Dutch", Some("Dutch"), "nld";
    NOE, "NOE", "Nimadi", Some("Nimadi"), "noe";
    NOG, "NOG", "Nogai", Some("Nogai"), "nog";
    NOR, "NOR", "Norwegian", Some("Norwegian Bokmål"), "nob";
    NOV, "NOV", "Novial", Some("Novial"), "nov";
    NSM, "NSM", "Northern Sami", Some("Northern Sami"), "sme";
    NSO, "NSO", "Sotho, Northern", Some("Pedi"), "nso";
    NTA, "NTA", "Northern Thai", Some("Northern Thai"), "nod";
    NTO, "NTO", "Esperanto", Some("Esperanto"), "epo";
    NYM, "NYM", "Nyamwezi", Some("Nyamwezi"), "nym";
    NYN, "NYN", "Norwegian Nynorsk (Nynorsk, Norwegian)", Some("Norwegian Nynorsk"), "nno";
    OCI, "OCI", "Occitan", Some("Occitan (post 1500)"), "oci";
    OCR, "OCR", "Oji-Cree", Some("Severn Ojibwa"), "ojs";
    OJB, "OJB", "Ojibway", Some("Ojibwa"), "oji";
    ORI, "ORI", "Odia (formerly Oriya)", Some("Oriya (macrolanguage)"), "ori";
    ORO, "ORO", "Oromo", Some("Oromo"), "orm";
    OSS, "OSS", "Ossetian", Some("Ossetian"), "oss";
    PAA, "PAA", "Palestinian Aramaic", Some("Samaritan Aramaic"), "sam";
    PAG, "PAG", "Pangasinan", Some("Pangasinan"), "pag";
    PAL, "PAL", "Pali", Some("Pali"), "pli";
    PAM, "PAM", "Pampangan", Some("Pampanga"), "pam";
    PAN, "PAN", "Punjabi", Some("Panjabi"), "pan";
    PAP, "PAP", "Palpa", Some("Palpa"), "plp";
    PAP0, "PAP0", "Papiamentu", Some("Papiamento"), "pap";
    PAS, "PAS", "Pashto", Some("Pushto"), "pus";
    PAU, "PAU", "Palauan", Some("Palauan"), "pau";
    PCC, "PCC", "Bouyei", Some("Bouyei"), "pcc";
    PCD, "PCD", "Picard", Some("Picard"), "pcd";
    PDC, "PDC", "Pennsylvania German", Some("Pennsylvania German"), "pdc";
    PGR, "PGR", "Polytonic Greek", Some("Modern Greek (1453-)"), "ell";
    PHK, "PHK", "Phake", Some("Phake"), "phk";
    PIH, "PIH", "Norfolk", Some("Pitcairn-Norfolk"), "pih";
    PIL, "PIL", "Filipino", Some("Filipino"), "fil";
    PLG, "PLG", "Palaung", None, "pce,rbb,pll";
    PLK, "PLK", "Polish", Some("Polish"), "pol";
    PMS, "PMS", "Piemontese", Some("Piemontese"), "pms";
    PNB, "PNB", "Western Panjabi", Some("Western Panjabi"), "pnb";
    POH, "POH", "Pocomchi", Some("Poqomchi'"), "poh";
    PON, "PON", "Pohnpeian", Some("Pohnpeian"), "pon";
    PRO, "PRO", "Provencal", Some("Old Provençal (to 1500)"), "pro";
    PTG, "PTG", "Portuguese", Some("Portuguese"), "por";
    PWO, "PWO", "Western Pwo Karen", Some("Pwo Western Karen"), "pwo";
    QIN, "QIN", "Chin", None, concat!(
        "bgr,cnh,cnw,czt,sez,tcp,csy,ctd,flm,pck,",
        "tcz,zom,cmr,dao,hlt,cka,cnk,mrh,mwg,cbl,",
        "cnb,csh"
    );
    QUC, "QUC", "K’iche’", Some("K'iche'"), "quc";
    QUH, "QUH", "Quechua (Bolivia)", Some("South Bolivian Quechua"), "quh";
    QUZ, "QUZ", "Quechua", Some("Cusco Quechua"), "quz";
    QVI, "QVI", "Quechua (Ecuador)", Some("Imbabura Highland Quichua"), "qvi";
    QWH, "QWH", "Quechua (Peru)", Some("Huaylas Ancash Quechua"), "qwh";
    RAJ, "RAJ", "Rajasthani", Some("Rajasthani"), "raj";
    RAR, "RAR", "Rarotongan", Some("Rarotongan"), "rar";
    RCR, "RCR", "R-Cree", Some("Atikamekw"), "atj";
    RBU, "RBU", "Russian Buriat", Some("Russia Buriat"), "bxr";
    REJ, "REJ", "Rejang", Some("Rejang"), "rej";
    RIA, "RIA", "Riang", Some("Riang (India)"), "ria";
    RIF, "RIF", "Tarifit", Some("Tarifit"), "rif";
    RIT, "RIT", "Ritarungo", Some("Ritarungo"), "rit";
    RKW, "RKW", "Arakwal", Some("Arakwal"), "rkw";
    RMS, "RMS", "Romansh", Some("Romansh"), "roh";
    RMY, "RMY", "Vlax Romani", Some("Vlax Romani"), "rmy";
    ROM, "ROM", "Romanian", Some("Romanian"), "ron";
    ROY, "ROY", "Romany", Some("Romany"), "rom";
    RSY, "RSY", "Rusyn", Some("Rusyn"), "rue";
    RTM, "RTM", "Rotuman", Some("Rotuman"), "rtm";
    RUA, "RUA", "Kinyarwanda", Some("Kinyarwanda"), "kin";
    RUN, "RUN", "Rundi", Some("Rundi"), "run";
    RUP, "RUP", "Aromanian", Some("Macedo-Romanian"), "rup";
    RUS, "RUS", "Russian", Some("Russian"), "rus";
    SAD, "SAD", "Sadri", Some("Sadri"), "sck";
    SAN, "SAN", "Sanskrit", Some("Sanskrit"), "san";
    SAS, "SAS", "Sasak", Some("Sasak"), "sas";
    SAT, "SAT", "Santali", Some("Santali"), "sat";
    SAY, "SAY", "Sayisi", Some("Chipewyan"), "chp";
    SCN, "SCN", "Sicilian", Some("Sicilian"), "scn";
    SCO, "SCO", "Scots", Some("Scots"), "sco";
    SEK, "SEK", "Sekota", Some("Xamtanga"), "xan";
    SEL, "SEL", "Selkup", Some("Selkup"), "sel";
    SGA, "SGA", "Old Irish", Some("Old Irish (to 900)"), "sga";
    SGO, "SGO", "Sango", Some("Sango"), "sag";
    SGS, "SGS", "Samogitian", Some("Samogitian"), "sgs";
    SHI, "SHI", "Tachelhit", Some("Tachelhit"), "shi";
    SHN, "SHN", "Shan", Some("Shan"), "shn";
    SIB, "SIB", "Sibe", Some("Xibe"), "sjo";
    SID, "SID", "Sidamo", Some("Sidamo"), "sid";
    SIG, "SIG", "Silte Gurage", None, "xst";
    SKS, "SKS", "Skolt Sami", Some("Skolt Sami"), "sms";
    SKY, "SKY", "Slovak", Some("Slovak"), "slk";
    SLA, "SLA", "Slavey", Some("North Slavey"), "scs";
    SLV, "SLV", "Slovenian", Some("Slovenian"), "slv";
    SML, "SML", "Somali", Some("Somali"), "som";
    SMO, "SMO", "Samoan", Some("Samoan"), "smo";
    SNA, "SNA", "Sena", Some("Sheko"), "she";
    SNA0, "SNA0", "Shona", Some("Shona"), "sna";
    SND, "SND", "Sindhi", Some("Sindhi"), "snd";
    SNH, "SNH", "Sinhala (Sinhalese)", Some("Sinhala"), "sin";
    SNK, "SNK", "Soninke", Some("Soninke"), "snk";
    SOG, "SOG", "Sodo Gurage", Some("Kistane"), "gru";
    SOP, "SOP", "Songe", Some("Songe"), "sop";
    SOT, "SOT", "Sotho, Southern", Some("Southern Sotho"), "sot";
    SQI, "SQI", "Albanian", Some("Swiss German"), "gsw";
    SRB, "SRB", "Serbian", Some("Serbian"), "srp";
    SRD, "SRD", "Sardinian", Some("Sardinian"), "srd";
    SRK, "SRK", "Seraiki", Some("Saraiki"), "skr";
    SRR, "SRR", "Serer", Some("Serer"), "srr";
    SSL, "SSL", "South Slavey", Some("South Slavey"), "xsl";
    SSM, "SSM", "Southern Sami", Some("Southern Sami"), "sma";
    STQ, "STQ", "Saterland Frisian", Some("Saterfriesisch"), "stq";
    SUK, "SUK", "Sukuma", Some("Sukuma"), "suk";
    SUN, "SUN", "Sundanese", Some("Sundanese"), "sun";
    SUR, "SUR", "Suri", Some("Suri"), "suq";
    SVA, "SVA", "Svan", Some("Svan"), "sva";
    SVE, "SVE", "Swedish", Some("Swedish"), "swe";
    SWA, "SWA", "Swadaya Aramaic", Some("Assyrian Neo-Aramaic"), "aii";
    SWK, "SWK", "Swahili", Some("Swahili (macrolanguage)"), "swa";
    SWZ, "SWZ", "Swati", Some("Swati"), "ssw";
    SXT, "SXT", "Sutu", Some("Ngoni"), "ngo";
    SXU, "SXU", "Upper Saxon", Some("Upper Saxon"), "sxu";
    SYL, "SYL", "Sylheti", Some("Sylheti"), "syl";
    SYR, "SYR", "Syriac", Some("Syriac"), "syr";
    SZL, "SZL", "Silesian", Some("Silesian"), "szl";
    TAB, "TAB", "Tabasaran", Some("Tabassaran"), "tab";
    TAJ, "TAJ", "Tajik", Some("Tajik"), "tgk";
    TAM, "TAM", "Tamil", Some("Tamil"), "tam";
    TAT, "TAT", "Tatar", Some("Tatar"), "tat";
    TCR, "TCR", "TH-Cree", Some("Woods Cree"), "cwd";
    TDD, "TDD", "Dehong Dai", Some("Tai Nüa"), "tdd";
    TEL, "TEL", "Telugu", Some("Telugu"), "tel";
    TET, "TET", "Tetum", Some("Tetum"), "tet";
    TGL, "TGL", "Tagalog", Some("Tagalog"), "tgl";
    TGN, "TGN", "Tongan", Some("Tonga (Tonga Islands)"), "ton";
    TGR, "TGR", "Tigre", Some("Tigre"), "tig";
    TGY, "TGY", "Tigrinya", Some("Tigrinya"), "tir";
    THA, "THA", "Thai", Some("Thai"), "tha";
    THT, "THT", "Tahitian", Some("Tahitian"), "tah";
    TIB, "TIB", "Tibetan", Some("Tibetan"), "bod";
    TIV, "TIV", "Tiv", Some("Tiv"), "tiv";
    TKM, "TKM", "Turkmen", Some("Turkmen"), "tuk";
    TMH, "TMH", "Tamashek", Some("Tamashek"), "tmh";
    TMN, "TMN", "Temne", Some("Timne"), "tem";
    TNA, "TNA", "Tswana", Some("Tswana"), "tsn";
    TNE, "TNE", "Tundra Nenets", Some("Tundra Enets"), "enh";
    TNG, "TNG", "Tonga", Some("Tonga (Zambia)"), "toi";
    TOD, "TOD", "Todo", Some("Kalmyk"), "xal";
    TOD0, "TOD0", "Toma", Some("Toma"), "tod";
    TPI, "TPI", "Tok Pisin", Some("Tok Pisin"), "tpi";
    TRK, "TRK", "Turkish", Some("Turkish"), "tur";
    TSG, "TSG", "Tsonga", Some("Tsonga"), "tso";
    TUA, "TUA", "Turoyo Aramaic", Some("Turoyo"), "tru";
    TUL, "TUL", "Tulu", Some("Tulu"), "tcy";
    TUM, "TUM", "Tumbuka", Some("Tumbuka"), "tum";
    TUV, "TUV", "Tuvin", Some("Tuvinian"), "tyv";
    TVL, "TVL", "Tuvalu", Some("Tuvalu"), "tvl";
    TWI, "TWI", "Twi", Some("Twi"), "twi";
    TYZ, "TYZ", "Tày", Some("Tày"), "tyz";
    TZM, "TZM", "Tamazight", Some("Central Atlas Tamazight"), "tzm";
    TZO, "TZO", "Tzotzil", Some("Tzotzil"), "tzo";
    UDM, "UDM", "Udmurt", Some("Udmurt"), "udm";
    UKR, "UKR", "Ukrainian", Some("Ukrainian"), "ukr";
    UMB, "UMB", "Umbundu", Some("Umbundu"), "umb";
    URD, "URD", "Urdu", Some("Urdu"), "urd";
    USB, "USB", "Upper Sorbian", Some("Upper Sorbian"), "hsb";
    UYG, "UYG", "Uyghur", Some("Uighur"), "uig";
    UZB, "UZB", "Uzbek", None, "uzb,uzn,uzs";
    VEC, "VEC", "Venetian", Some("Venetian"), "vec";
    VEN, "VEN", "Venda", Some("Venda"), "ven";
    VIT, "VIT", "Vietnamese", Some("Vietnamese"), "vie";
    VOL, "VOL", "Volapük", Some("Volapük"), "vol";
    VRO, "VRO", "Võro", Some("Võro"), "vro";
    WA, "WA", "Wa", Some("Wa"), "wbm";
    WAG, "WAG", "Wagdi", Some("Wagdi"), "wbr";
    WAR, "WAR", "Waray-Waray", Some("Waray (Philippines)"), "war";
    WCR, "WCR", "West-Cree", Some("Plains Cree"), "crk";
    WEL, "WEL", "Welsh", Some("Welsh"), "cym";
    WLN, "WLN", "Walloon", Some("Walloon"), "wln";
    WLF, "WLF", "Wolof", Some("Wolof"), "wol";
    WTM, "WTM", "Mewati", Some("Mewati"), "wtm";
    XBD, "XBD", "Lü", Some("Lü"), "khb";
    XHS, "XHS", "Xhosa", Some("Xhosa"), "xho";
    XJB, "XJB", "Minjangbal", Some("Minjungbal"), "xjb";
    XOG, "XOG", "Soga", Some("Soga"), "xog";
    XPE, "XPE", "Kpelle (Liberia)", Some("Liberia Kpelle"), "xpe";
    YAK, "YAK", "Sakha", Some("Yakut"), "sah";
    YAO, "YAO", "Yao", Some("Yao"), "yao";
    YAP, "YAP", "Yapese", Some("Yapese"), "yap";
    YBA, "YBA", "Yoruba", Some("Yoruba"), "yor";
    YCR, "YCR", "Y-Cree", Some("Cree"), "cre";
    YIC, "YIC", "Yi Classic", None, "";
    YIM, "YIM", "Yi Modern", Some("Sichuan Yi"), "iii";
    ZEA, "ZEA", "Zealandic", Some("Zeeuws"), "zea";
    ZGH, "ZGH", "Standard Morrocan Tamazigh", Some("Standard Moroccan Tamazight"), "zgh";
    ZHA, "ZHA", "Zhuang", Some("Zhuang"), "zha";
    ZHH, "ZHH", "Chinese, Hong Kong SAR", Some("Chinese"), "zho";
    ZHP, "ZHP", "Chinese Phonetic", Some("Chinese"), "zho";
    ZHS, "ZHS", "Chinese Simplified", Some("Chinese"), "zho";
    ZHT, "ZHT", "Chinese Traditional", Some("Chinese"), "zho";
    ZND, "ZND", "Zande", Some("Zande (individual language)"), "zne";
    ZUL, "ZUL", "Zulu", Some("Zulu"), "zul";
    ZZA, "ZZA", "Zazaki", Some("Zaza"), "zza";

    // Tags seen in shipping fonts but absent from the OpenType registry.
    CHN, "CHN", "Chinese -- as seen in win7 kaiu.ttf", Some("Chinese"), "zho";
    DFLT, "DFLT", "default", None, "";
    KHN, "KHN", "Khun(?)", Some("Khün"), "kkh";
    de, "de", "German found in FreeSerif.ttf", Some("German"), "deu";
    nl, "nl", "Dutch found in FreeSansBoldOblique.ttf", Some("Dutch"), "nld";
    tmh, "tmh", "Tamashek found in ebrimabd.ttf", Some("Tamashek"), "tmh";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{decode_tag, encode_tag};

    #[test]
    fn table_and_index_agree() {
        assert_eq!(ALL_LANGUAGE_TAGS.len(), LANGUAGE_TAG_INDEX.len());
        for e in ALL_LANGUAGE_TAGS {
            assert_eq!(LANGUAGE_TAG_INDEX.get(e.identifier()), Some(e));
        }
    }

    #[test]
    fn identifiers_decode_back_from_tags() {
        for e in ALL_LANGUAGE_TAGS {
            assert_eq!(e.tag(), encode_tag(e.identifier()));
            assert_eq!(decode_tag(e.tag()), e.identifier());
        }
    }

    #[test]
    fn codes_are_three_lowercase_letters() {
        for e in ALL_LANGUAGE_TAGS {
            for code in e.iso3_codes() {
                assert_eq!(code.len(), 3, "{}: bad code {code:?}", e.identifier());
                assert!(code.bytes().all(|b| b.is_ascii_lowercase()), "{code}");
            }
        }
    }

    #[test]
    fn only_dhv_is_deprecated() {
        let deprecated: Vec<_> = ALL_LANGUAGE_TAGS
            .iter()
            .filter(|e| e.is_deprecated())
            .collect();
        assert_eq!(deprecated, [&DHV]);
        assert!(!DIV.is_deprecated());
        assert_eq!(DHV.iso3_codes(), DIV.iso3_codes());
    }

    #[test]
    fn table_order_is_declaration_order() {
        assert_eq!(ALL_LANGUAGE_TAGS.first(), Some(&ABA));
        assert_eq!(ALL_LANGUAGE_TAGS.last(), Some(&tmh));
        assert_eq!(ALL_LANGUAGE_TAGS.len(), 591);
    }

    #[test]
    fn suffixed_identifiers_are_kept_verbatim() {
        assert_eq!(BAD0.identifier(), "BAD0");
        assert_eq!(BAD0.tag(), u32::from_be_bytes(*b"BAD0"));
        assert_eq!(BAD.display_name(), "Badaga");
        assert_eq!(BAD0.display_name(), "Banda");
        assert_eq!(CHK0.iso3_codes().as_slice(), &["chk"]);
        assert_eq!(GIL0.iso639_name(), Some("Gilbertese"));
    }

    #[test]
    fn long_code_lists_keep_registry_order() {
        let ath = ATH.iso3_codes();
        assert_eq!(ath.len(), 43);
        assert_eq!(ath.first(), Some(&"apk"));
        assert_eq!(ath.last(), Some(&"txc"));
        let qin = QIN.iso3_codes();
        assert_eq!(qin.len(), 22);
        assert_eq!(qin[..3], ["bgr", "cnh", "cnw"]);
        assert_eq!(qin.last(), Some(&"csh"));
    }

    #[test]
    fn ambiguous_rows_have_no_iso639_name() {
        assert_eq!(ALT.iso639_name(), None);
        assert_eq!(ALT.iso3_codes().as_slice(), &["atv", "alt"]);
        assert_eq!(BBR.iso639_name(), None);
        assert!(BBR.iso3_codes().is_empty());
        assert_eq!(DFLT.iso639_name(), None);
        assert!(DFLT.iso3_codes().is_empty());
    }

    #[test]
    fn registry_typos_are_preserved() {
        assert_eq!(ZGH.display_name(), "Standard Morrocan Tamazigh");
        assert_eq!(ZGH.iso639_name(), Some("Standard Moroccan Tamazight"));
        assert_eq!(SQI.iso3_codes().as_slice(), &["gsw"]);
    }

    #[test]
    fn non_ascii_names_survive() {
        assert_eq!(BAU.display_name(), "Baoulé");
        assert_eq!(KSW.display_name(), "S’gaw Karen");
        assert_eq!(KSW.iso639_name(), Some("S'gaw Karen"));
        assert_eq!(TDD.iso639_name(), Some("Tai Nüa"));
    }

    #[test]
    fn nonstandard_font_tags_are_present() {
        assert_eq!(de.tag(), u32::from_be_bytes(*b"de  "));
        assert_eq!(nl.iso3_codes().as_slice(), &["nld"]);
        assert_ne!(TMH.tag(), tmh.tag());
        assert_eq!(TMH.iso3_codes(), tmh.iso3_codes());
    }
}

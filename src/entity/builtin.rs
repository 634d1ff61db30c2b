//! Built-in extraction dictionaries.
//!
//! Static bilingual (Japanese/English) tables covering the wellness
//! catalog this router fronts. Entries are authored lowercase; table
//! order is meaningful because extraction reports hits in it.

use std::sync::LazyLock;

use crate::entity::EntityKind;
use crate::entity::dictionary::{PatternDictionary, TermDictionary};

/// Ingredient and nutrient names, matched as literal terms.
const INGREDIENT_TERMS: &[&str] = &[
    // vitamins
    "ビタミン",
    "ビタミンa",
    "ビタミンb1",
    "ビタミンb2",
    "ビタミンb6",
    "ビタミンb12",
    "ビタミンc",
    "ビタミンd",
    "ビタミンe",
    "ビタミンk",
    "マルチビタミン",
    "葉酸",
    "ナイアシン",
    "ビオチン",
    "パントテン酸",
    // minerals
    "ミネラル",
    "鉄",
    "亜鉛",
    "カルシウム",
    "マグネシウム",
    "カリウム",
    "セレン",
    // fatty acids
    "dha",
    "epa",
    "オメガ3",
    "魚油",
    // gut
    "乳酸菌",
    "ビフィズス菌",
    "食物繊維",
    "オリゴ糖",
    // beauty
    "コラーゲン",
    "ヒアルロン酸",
    "セラミド",
    "プラセンタ",
    "コエンザイムq10",
    // joints and eyes
    "グルコサミン",
    "コンドロイチン",
    "ルテイン",
    "アスタキサンチン",
    // botanicals and others
    "ポリフェノール",
    "カテキン",
    "イソフラボン",
    "セサミン",
    "gaba",
    "ギャバ",
    "テアニン",
    "プロテイン",
    "アミノ酸",
    "bcaa",
    "アルギニン",
    "オルニチン",
    "シトルリン",
    "クレアチン",
    "カルニチン",
    "マカ",
    "高麗人参",
    "ローヤルゼリー",
    "プロポリス",
    "青汁",
    "酵素",
    "ウコン",
    "しじみ",
    "ブルーベリー",
    "ノコギリヤシ",
    // english
    "vitamin a",
    "vitamin b",
    "vitamin c",
    "vitamin d",
    "vitamin e",
    "multivitamin",
    "folic acid",
    "niacin",
    "biotin",
    "iron",
    "zinc",
    "calcium",
    "magnesium",
    "potassium",
    "omega 3",
    "fish oil",
    "probiotics",
    "lactobacillus",
    "collagen",
    "coenzyme q10",
    "glucosamine",
    "chondroitin",
    "lutein",
    "astaxanthin",
    "protein",
    "amino acid",
    "arginine",
    "creatine",
    "maca",
    "royal jelly",
    "propolis",
];

/// Product lines and brand names, matched as literal terms.
const PRODUCT_TERMS: &[&str] = &[
    "dhc",
    "ファンケル",
    "ネイチャーメイド",
    "ディアナチュラ",
    "オリヒロ",
    "ザバス",
    "アサヒ",
    "小林製薬",
    "大塚製薬",
    "明治",
    "サントリー",
    "キリン",
    "ピジョン",
    "チョコラbb",
    "アリナミン",
    "ハイチオール",
    "リポビタン",
    "エビオス",
    "ビオフェルミン",
    "新ビオフェルミン",
    "強力わかもと",
    "キューサイ",
    "やずや",
    "マイプロテイン",
    // english
    "fancl",
    "nature made",
    "dear natura",
    "orihiro",
    "savas",
    "asahi",
    "kobayashi",
    "otsuka",
    "meiji",
    "suntory",
    "kirin",
    "pigeon",
    "chocola bb",
    "alinamin",
    "now foods",
    "nature's way",
    "solgar",
    "myprotein",
];

/// Health and biographical circumstances, as regex sources.
const CONDITION_PATTERNS: &[&str] = &[
    r"妊娠中|妊婦|マタニティ",
    r"妊活|不妊",
    r"授乳中|授乳期|母乳",
    r"産後",
    r"更年期|閉経",
    r"生理(中|前|不順)|pms",
    r"薬を(飲|の)んで(いる|います|る)?",
    r"(服用|服薬)中",
    r"通院中|入院中|治療中",
    r"持病",
    r"糖尿病|高血圧|痛風",
    r"アレルギー(体質|持ち)?",
    r"(卵|乳|小麦|そば|大豆)アレルギー",
    r"[0-9]+歳|[0-9]+代",
    r"高齢|シニア|年配",
    r"子供|子ども|こども|幼児|小学生",
    r"ダイエット中|減量中|糖質制限",
    r"お?酒を(よく)?(飲|の)む|飲酒",
    r"喫煙|タバコ|たばこ",
    r"ベジタリアン|ヴィーガン|菜食",
    // english
    r"pregnan(t|cy)",
    r"breastfeeding|nursing",
    r"taking (medication|medicine)",
    r"diabet(es|ic)",
    r"high blood pressure",
    r"allerg(ies|ic|y)",
    r"[0-9]+ years? old",
    r"elderly|senior",
    r"vegetarian|vegan",
];

/// Subjective complaints, as regex sources.
const SYMPTOM_PATTERNS: &[&str] = &[
    r"疲れ(やすい|がち|が取れない|気味)?|疲労感?",
    r"だる(い|さ)|倦怠感",
    r"眠れない|寝つきが悪い|不眠|睡眠不足|寝不足",
    r"ストレス",
    r"イライラ|いらいら",
    r"肌荒れ|乾燥肌|ニキビ|にきび|しみ|しわ|たるみ|くすみ",
    r"冷え性?",
    r"便秘",
    r"下痢|お(腹|なか)を(壊|こわ)し",
    r"胃もたれ|胸やけ|食欲不振|消化不良",
    r"貧血|立ちくらみ",
    r"頭痛|偏頭痛|片頭痛",
    r"肩こり|首こり",
    r"腰痛|関節痛|(ひざ|膝)が痛い",
    r"目の疲れ|眼精疲労|かすみ目|ドライアイ",
    r"むくみ|むくむ",
    r"太り(やすい|気味)|体重が(増|ふ)え",
    r"痩せにくい|やせにくい",
    r"抜け毛|薄毛|白髪",
    r"口内炎",
    r"風邪を(ひ|引)きやすい|免疫力?が?(低下|落ち|下が)",
    r"集中力が?(ない|続かない|落ち)|物忘れ",
    r"花粉症?",
    r"二日酔い",
    r"動悸|息切れ|めまい",
    // english
    r"tired(ness)?|fatigued?",
    r"insomnia|can't sleep|cannot sleep|sleepless",
    r"stress(ed|ful)?",
    r"constipat(ed|ion)",
    r"headaches?|migraines?",
    r"dizzy|dizziness",
    r"bloat(ed|ing)",
    r"hair loss|thinning hair",
    r"dry (skin|eyes?)",
    r"runny nose|hay fever",
];

/// The built-in ingredient dictionary.
pub static INGREDIENTS: LazyLock<TermDictionary> = LazyLock::new(|| {
    TermDictionary::new(EntityKind::Ingredient, INGREDIENT_TERMS.iter().copied())
});

/// The built-in product and brand dictionary.
pub static PRODUCTS: LazyLock<TermDictionary> =
    LazyLock::new(|| TermDictionary::new(EntityKind::Product, PRODUCT_TERMS.iter().copied()));

/// The built-in condition dictionary.
pub static CONDITIONS: LazyLock<PatternDictionary> = LazyLock::new(|| {
    PatternDictionary::new(EntityKind::Condition, CONDITION_PATTERNS.iter().copied())
        .expect("built-in condition patterns compile")
});

/// The built-in symptom dictionary.
pub static SYMPTOMS: LazyLock<PatternDictionary> = LazyLock::new(|| {
    PatternDictionary::new(EntityKind::Symptom, SYMPTOM_PATTERNS.iter().copied())
        .expect("built-in symptom patterns compile")
});

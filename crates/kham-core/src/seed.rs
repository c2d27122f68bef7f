use crate::glossary::GlossaryEntry;

const SEED: &[(&str, &str, &str)] = &[
    (
        "Python",
        "Python (ภาษาโปรแกรม)",
        "ภาษาโปรแกรมระดับสูงที่อ่านง่าย นิยมใช้ในงานวิเคราะห์ข้อมูลและปัญญาประดิษฐ์",
    ),
    (
        "Computer",
        "คอมพิวเตอร์",
        "เครื่องจักรอิเล็กทรอนิกส์ที่ประมวลผลข้อมูลตามชุดคำสั่ง",
    ),
    (
        "Artificial Intelligence",
        "ปัญญาประดิษฐ์",
        "ความสามารถของเครื่องจักรในการเรียนรู้ ให้เหตุผล และตัดสินใจคล้ายมนุษย์",
    ),
    (
        "Machine Learning",
        "การเรียนรู้ของเครื่อง",
        "สาขาหนึ่งของปัญญาประดิษฐ์ที่ให้ระบบเรียนรู้รูปแบบจากข้อมูลโดยไม่ต้องเขียนกฎตายตัว",
    ),
    (
        "Algorithm",
        "ขั้นตอนวิธี",
        "ลำดับขั้นตอนที่ชัดเจนสำหรับแก้ปัญหาหรือคำนวณผลลัพธ์",
    ),
    (
        "Application",
        "แอปพลิเคชัน",
        "โปรแกรมที่ออกแบบมาให้ผู้ใช้ทำงานเฉพาะอย่าง",
    ),
    (
        "Augmented Reality",
        "ความจริงเสริม",
        "เทคโนโลยีที่ซ้อนภาพหรือข้อมูลดิจิทัลลงบนโลกจริงแบบเรียลไทม์",
    ),
    (
        "Automation",
        "ระบบอัตโนมัติ",
        "การใช้เทคโนโลยีทำงานแทนมนุษย์โดยลดการควบคุมด้วยมือ",
    ),
    (
        "Big Data",
        "ข้อมูลขนาดใหญ่",
        "ชุดข้อมูลปริมาณมหาศาลที่ต้องใช้เครื่องมือพิเศษในการจัดเก็บและวิเคราะห์",
    ),
    (
        "Blockchain",
        "บล็อกเชน",
        "ระบบบัญชีแยกประเภทแบบกระจายที่บันทึกธุรกรรมต่อกันเป็นบล็อกและแก้ไขย้อนหลังได้ยาก",
    ),
];

/// Curated entries written out when no glossary file exists yet
pub fn seed_entries() -> Vec<GlossaryEntry> {
    SEED.iter()
        .map(|(en, th, description)| GlossaryEntry::new(*en, *th, *description))
        .collect()
}

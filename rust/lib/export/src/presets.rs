//! Column sets used by the list screens' export buttons.

use crate::csv_export::Column;
use crate::error::ExportError;

fn cols(spec: &[(&str, &str)]) -> Vec<Column> {
    spec.iter().map(|(path, header)| Column::new(*path, *header)).collect()
}

/// Names accepted by [`preset`].
pub const PRESETS: &[&str] = &[
    "reports",
    "dental-assets",
    "dental-contracts",
    "direct-purchase",
    "transactions",
    "inventory",
    "dispensing",
    "facilities",
    "suppliers",
    "staff",
];

/// Columns for a resource's export, by resource name.
pub fn preset(name: &str) -> Result<Vec<Column>, ExportError> {
    let columns = match name {
        "reports" => cols(&[
            ("report_number", "رقم البلاغ"),
            ("title", "العنوان"),
            ("facility_name", "المنشأة"),
            ("device_name", "الجهاز"),
            ("priority", "الأولوية"),
            ("status", "الحالة"),
            ("reported_at", "تاريخ البلاغ"),
            ("closed_at", "تاريخ الإغلاق"),
        ]),
        "dental-assets" => cols(&[
            ("name", "اسم الجهاز"),
            ("serial_number", "الرقم التسلسلي"),
            ("model", "الموديل"),
            ("manufacturer", "الشركة المصنعة"),
            ("facility_name", "المنشأة"),
            ("status", "الحالة"),
            ("purchase_date", "تاريخ الشراء"),
            ("warranty_end", "نهاية الضمان"),
        ]),
        "dental-contracts" => cols(&[
            ("contract_number", "رقم العقد"),
            ("device_name", "الجهاز"),
            ("facility_name", "المنشأة"),
            ("supplier_name", "المورد"),
            ("quantity", "الكمية"),
            ("amount", "القيمة"),
            ("status", "الحالة"),
            ("contract_date", "تاريخ العقد"),
        ]),
        "direct-purchase" => cols(&[
            ("order_number", "رقم الطلب"),
            ("item_name", "الصنف"),
            ("facility_name", "المنشأة"),
            ("supplier_name", "المورد"),
            ("quantity", "الكمية"),
            ("total_amount", "الإجمالي"),
            ("status", "الحالة"),
            ("order_date", "تاريخ الطلب"),
        ]),
        "transactions" => cols(&[
            ("transaction_number", "رقم المعاملة"),
            ("subject", "الموضوع"),
            ("sender", "الجهة المرسلة"),
            ("receiver", "الجهة المستقبلة"),
            ("current_location", "الموقع الحالي"),
            ("status", "الحالة"),
            ("transaction_date", "التاريخ"),
        ]),
        "inventory" => cols(&[
            ("item_code", "رمز الصنف"),
            ("name", "اسم الصنف"),
            ("category", "الفئة"),
            ("unit", "الوحدة"),
            ("quantity", "الكمية"),
            ("min_quantity", "الحد الأدنى"),
            ("location", "الموقع"),
            ("expiry_date", "تاريخ الانتهاء"),
        ]),
        "dispensing" => cols(&[
            ("request_number", "رقم الطلب"),
            ("item_name", "الصنف"),
            ("facility_name", "المنشأة"),
            ("quantity", "الكمية"),
            ("recipient", "المستلم"),
            ("dispensed_at", "تاريخ الصرف"),
        ]),
        "facilities" => cols(&[
            ("code", "الرمز"),
            ("name", "اسم المنشأة"),
            ("type", "النوع"),
            ("region", "المنطقة"),
            ("manager", "المدير"),
            ("phone", "الهاتف"),
        ]),
        "suppliers" => cols(&[
            ("name", "اسم المورد"),
            ("contact_person", "مسؤول التواصل"),
            ("phone", "الهاتف"),
            ("email", "البريد الإلكتروني"),
            ("commercial_record", "السجل التجاري"),
        ]),
        "staff" => cols(&[
            ("name", "الاسم"),
            ("email", "البريد الإلكتروني"),
            ("phone", "الهاتف"),
            ("department", "القسم"),
            ("role", "الدور"),
            ("is_active", "نشط"),
        ]),
        other => return Err(ExportError::UnknownPreset(other.to_string())),
    };
    Ok(columns)
}

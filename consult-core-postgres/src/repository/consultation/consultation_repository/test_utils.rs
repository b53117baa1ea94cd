use consult_core_db::models::consultation::{Carrier, ConsultationStatus, InternetSpeed, NewConsultation};

pub fn create_test_consultation(customer_name: &str) -> NewConsultation {
    NewConsultation {
        status: Some(ConsultationStatus::FollowUpNeeded),
        customer_name: customer_name.to_string(),
        phone: "010-8803-3244".to_string(),
        first_consultation_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5),
        follow_up_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 8),
        carrier: Some(Carrier::Lg),
        speed: Some(InternetSpeed::Mbps100),
        has_tv: true,
        product_summary: Some("LGU+ 100MB+WiFi".to_string()),
        consultation_note: Some("사은품 20+2 / 다음날 연락준다함".to_string()),
        memo: Some("반응 좋음".to_string()),
        consultant: Some("정상문".to_string()),
        ..Default::default()
    }
}

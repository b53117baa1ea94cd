use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Progress of a consultation from first contact to installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "consultation_status")]
pub enum ConsultationStatus {
    #[default]
    #[serde(rename = "신규")]
    #[sqlx(rename = "신규")]
    New,
    #[serde(rename = "재상담필요")]
    #[sqlx(rename = "재상담필요")]
    FollowUpNeeded,
    #[serde(rename = "연락안됨")]
    #[sqlx(rename = "연락안됨")]
    Unreachable,
    #[serde(rename = "상담완료")]
    #[sqlx(rename = "상담완료")]
    Consulted,
    #[serde(rename = "접수완료")]
    #[sqlx(rename = "접수완료")]
    Received,
    #[serde(rename = "설치완료")]
    #[sqlx(rename = "설치완료")]
    Installed,
    #[serde(rename = "취소")]
    #[sqlx(rename = "취소")]
    Cancelled,
}

impl ConsultationStatus {
    pub const ALL: [ConsultationStatus; 7] = [
        ConsultationStatus::New,
        ConsultationStatus::FollowUpNeeded,
        ConsultationStatus::Unreachable,
        ConsultationStatus::Consulted,
        ConsultationStatus::Received,
        ConsultationStatus::Installed,
        ConsultationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::New => "신규",
            ConsultationStatus::FollowUpNeeded => "재상담필요",
            ConsultationStatus::Unreachable => "연락안됨",
            ConsultationStatus::Consulted => "상담완료",
            ConsultationStatus::Received => "접수완료",
            ConsultationStatus::Installed => "설치완료",
            ConsultationStatus::Cancelled => "취소",
        }
    }
}

impl std::fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConsultationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsultationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "carrier", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Carrier {
    Skb,
    Kt,
    Lg,
}

impl Carrier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Carrier::Skb => "SKB",
            Carrier::Kt => "KT",
            Carrier::Lg => "LG",
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Carrier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SKB" => Ok(Carrier::Skb),
            "KT" => Ok(Carrier::Kt),
            "LG" => Ok(Carrier::Lg),
            _ => Err(()),
        }
    }
}

/// Contracted internet line speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "internet_speed")]
pub enum InternetSpeed {
    #[serde(rename = "100M")]
    #[sqlx(rename = "100M")]
    Mbps100,
    #[serde(rename = "500M")]
    #[sqlx(rename = "500M")]
    Mbps500,
    #[serde(rename = "1G")]
    #[sqlx(rename = "1G")]
    Gbps1,
}

impl InternetSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternetSpeed::Mbps100 => "100M",
            InternetSpeed::Mbps500 => "500M",
            InternetSpeed::Gbps1 => "1G",
        }
    }
}

impl std::fmt::Display for InternetSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InternetSpeed {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "100M" => Ok(InternetSpeed::Mbps100),
            "500M" => Ok(InternetSpeed::Mbps500),
            "1G" => Ok(InternetSpeed::Gbps1),
            _ => Err(()),
        }
    }
}

//! # プロジェクト振り分け
//!
//! 送信元のフォームによって、患者を登録する Tasso プロジェクトが変わる。
//! フォームは送信パス `/submit/<form id>` で識別する。

use strum::IntoStaticStr;

/// GLP-1 フォームの送信パス
pub const GLP1_SUBMIT_PATH: &str = "/submit/242116255933151";
/// テストステロンフォームの送信パス
pub const TESTOSTRONE_SUBMIT_PATH: &str = "/submit/242115439242147";

/// 治療プログラム
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Program {
    Glp1,
    Testosterone,
}

impl Program {
    /// 送信パスからプログラムを決める
    ///
    /// 既知のパス以外（未送信を含む）は GLP-1 とする。
    pub fn from_submit_path(path: Option<&str>) -> Self {
        match path {
            Some(GLP1_SUBMIT_PATH) => Self::Glp1,
            Some(TESTOSTRONE_SUBMIT_PATH) => Self::Testosterone,
            _ => Self::Glp1,
        }
    }
}

/// プログラムごとの Tasso プロジェクト ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIds {
    pub glp1:         String,
    pub testosterone: String,
}

impl ProjectIds {
    pub fn project_for(&self, program: Program) -> &str {
        match program {
            Program::Glp1 => &self.glp1,
            Program::Testosterone => &self.testosterone,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(GLP1_SUBMIT_PATH), Program::Glp1)]
    #[case(Some(TESTOSTRONE_SUBMIT_PATH), Program::Testosterone)]
    #[case(Some("/submit/999999999999999"), Program::Glp1)]
    #[case(Some(""), Program::Glp1)]
    #[case(None, Program::Glp1)]
    fn test_送信パスからプログラムを決める(#[case] path: Option<&str>, #[case] expected: Program) {
        assert_eq!(Program::from_submit_path(path), expected);
    }

    #[test]
    fn test_プログラムに対応するプロジェクトidを返す() {
        let ids = ProjectIds {
            glp1:         "glp1-project".to_string(),
            testosterone: "trt-project".to_string(),
        };

        assert_eq!(ids.project_for(Program::Glp1), "glp1-project");
        assert_eq!(ids.project_for(Program::Testosterone), "trt-project");
    }

    #[test]
    fn test_ログ用の名前はスネークケース() {
        let name: &'static str = Program::Testosterone.into();
        assert_eq!(name, "testosterone");
    }
}

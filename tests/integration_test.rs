//! 端到端测试：临时 CSV 答案库 + 内联试卷 HTML，走完整的
//! 装载 → 提取 → 匹配 → 输出 流程，核对最终报告文本。

use exam_answer_extract::cli::Cli;
use exam_answer_extract::config::Config;
use exam_answer_extract::infrastructure::load_rows;
use exam_answer_extract::services::{KeyLoader, QuestionExtractor, Reporter};
use exam_answer_extract::App;
use scraper::Html;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// 写一个临时 CSV 答案表
fn write_key_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(content.as_bytes()).expect("写入失败");
    file.flush().expect("刷新失败");
    file
}

/// 题干列 A、答案列 H、选项列 B-C
fn test_config(key_path: PathBuf) -> Config {
    Config::resolve(Cli {
        key: Some(key_path),
        html: Some(PathBuf::from("unused.html")),
        question_col: Some("A".to_string()),
        answer_col: Some("H".to_string()),
        option_cols: Some("B-C".to_string()),
        config: None,
    })
    .expect("配置解析失败")
}

/// 跑完整流程，返回报告文本
fn run_pipeline(csv: &str, html: &str) -> String {
    let key_file = write_key_csv(csv);
    let config = test_config(key_file.path().to_path_buf());

    let rows = load_rows(key_file.path()).expect("读取答案表失败");
    let key = KeyLoader::new(&config).load(&rows);

    let document = Html::parse_document(html);
    let questions = QuestionExtractor::new()
        .expect("选择器构建失败")
        .extract(&document);

    let mut buffer = Vec::new();
    App::new(config)
        .process(&questions, &key, &mut Reporter::new(&mut buffer))
        .expect("批处理失败");
    String::from_utf8(buffer).expect("报告不是合法 UTF-8")
}

#[test]
fn test_choice_question_resolved_by_letter() {
    // 全角问号的题干要能匹配上半角问号的网页题
    let csv = "1+1等于几？,2,3,,,,,A\n";
    let html = r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>1+1等于几?</span><em>单选题</em></div>
          <ul>
            <li><em>A</em><span>2</span></li>
            <li><em>B</em><span>3</span></li>
          </ul>
        </div>"#;

    let report = run_pipeline(csv, html);
    assert!(report.contains("题号: 1. 1+1等于几?"));
    assert!(report.contains("正确答案: A (2)"));
    assert!(!report.contains("[!]"), "精确匹配不应出现模糊匹配提示");
}

#[test]
fn test_judge_question_resolved_regardless_of_options() {
    let csv = "地球绕着太阳转。,,,,,,,正确\n一年有十三个月。,,,,,,,错误\n";
    let html = r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>地球绕着太阳转。</span><em>判断题</em></div>
        </div>
        <div class="questions">
          <div class="title"><span>2.</span><span>一年有十三个月。</span><em>判断题</em></div>
        </div>"#;

    let report = run_pipeline(csv, html);
    assert!(report.contains("正确答案: ✅"));
    assert!(report.contains("正确答案: ❌"));
}

#[test]
fn test_fuzzy_match_note_surfaced() {
    // 表里的题干比网页多一个"的"字，只能靠模糊匹配命中
    let csv = "光合作用需要阳光的参与，对吗？,,,,,,,正确\n";
    let html = r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>光合作用需要阳光参与，对吗？</span><em>判断题</em></div>
        </div>"#;

    let report = run_pipeline(csv, html);
    assert!(report.contains("[!] 未找到精确题干，已智能匹配最相似同类型题目："));
    assert!(report.contains("正确答案: ✅"));
}

#[test]
fn test_unresolved_option_marked_with_question_mark() {
    // 答案 B 对应的"大象"在网页选项里不存在
    let csv = "下列哪些是动物？,猫,大象,,,,,AB\n";
    let html = r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>下列哪些是动物？</span><em>多选题</em></div>
          <ul>
            <li><em>A</em><span>猫</span></li>
            <li><em>B</em><span>石头</span></li>
          </ul>
        </div>"#;

    let report = run_pipeline(csv, html);
    assert!(report.contains("正确答案: ?A"));
    assert!(report.contains("未找到文本匹配: 大象"));
}

#[test]
fn test_later_questions_survive_earlier_failures() {
    let csv = "风马牛不相及的题,,,,,,,正确\n";
    let html = r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>qqqq</span><em>单选题</em></div>
        </div>
        <div class="questions">
          <div class="title"><span>2.</span><span>风马牛不相及的题</span><em>判断题</em></div>
        </div>"#;

    let report = run_pipeline(csv, html);
    assert!(report.contains("题号: 2."));
    assert!(report.contains("正确答案: ✅"));
}

#[test]
fn test_empty_key_reports_every_question_unmatched() {
    let report = run_pipeline(
        "\n",
        r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>任何题目</span></div>
        </div>"#,
    );
    assert!(report.contains("正确答案: [题库为空或无法匹配]"));
}

#[test]
fn test_app_run_end_to_end() {
    let key_file = write_key_csv("1+1等于几？,2,3,,,,,A\n");
    let mut html_file = NamedTempFile::new().expect("创建临时文件失败");
    html_file
        .write_all(
            r#"
        <div class="questions">
          <div class="title"><span>1.</span><span>1+1等于几?</span><em>单选题</em></div>
          <ul><li><em>A</em><span>2</span></li><li><em>B</em><span>3</span></li></ul>
        </div>"#
                .as_bytes(),
        )
        .expect("写入失败");
    html_file.flush().expect("刷新失败");

    let config = Config::resolve(Cli {
        key: Some(key_file.path().to_path_buf()),
        html: Some(html_file.path().to_path_buf()),
        question_col: None,
        answer_col: None,
        option_cols: Some("B-C".to_string()),
        config: None,
    })
    .expect("配置解析失败");

    assert!(App::new(config).run().is_ok());
}

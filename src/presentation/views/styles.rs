pub const STYLESHEET: &str = r#"
body { font-family: "Noto Naskh Arabic", "Segoe UI", Tahoma, sans-serif; margin: 0; background: #fafafa; color: #212121; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 280px; background: #f0f2f6; padding: 1.5rem; box-sizing: border-box; }
.main { flex: 1; padding: 1.5rem 2rem; }
.main-header { font-size: 3rem; font-weight: bold; text-align: center; color: #1E88E5; margin-bottom: 2rem; }
.columns { display: flex; gap: 2rem; }
.col-wide { flex: 2; }
.col-narrow { flex: 1; }
.feature-box { background-color: #f0f2f6; padding: 1rem; border-radius: 10px; margin: 1rem 0; border-right: 5px solid #1E88E5; }
.metric-card { background-color: white; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); text-align: center; margin-bottom: 0.75rem; }
.metric-card .metric-label { font-size: 0.9rem; color: #616161; }
.metric-card .metric-value { font-size: 1.8rem; font-weight: bold; }
.notice { padding: 1rem; border-radius: 5px; margin: 0.5rem 0; }
.notice-success, .success-box { background-color: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
.notice-warning, .warning-box { background-color: #fff3cd; color: #856404; border: 1px solid #ffeaa7; }
.notice-error { background-color: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
.notice-info { background-color: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }
textarea { width: 100%; height: 300px; box-sizing: border-box; font-size: 1rem; }
input[type=url] { width: 100%; box-sizing: border-box; }
button.primary { background: #FF4B4B; color: white; border: none; padding: 0.6rem 1.4rem; border-radius: 6px; font-size: 1rem; cursor: pointer; }
button.primary:disabled { background: #e0e0e0; color: #9e9e9e; cursor: not-allowed; }
progress { width: 100%; height: 1rem; }
.tabs { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.tab { background: white; border-radius: 10px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #e0e0e0; padding: 0.4rem 0.6rem; text-align: right; }
.chart figcaption { font-weight: bold; margin-bottom: 0.5rem; }
.chart-empty { color: #9e9e9e; }
.chart-canvas svg { max-width: 100%; height: auto; direction: ltr; }
.hbar-row { display: flex; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.hbar-label { width: 30%; }
.hbar-track { flex: 1; background: #eeeeee; height: 1rem; border-radius: 3px; }
.hbar-fill { height: 100%; border-radius: 3px; }
.hbar-marker .hbar-fill { border-left: 3px solid #212121; background: transparent !important; }
.hbar-soft .hbar-fill { opacity: 0.45; }
.swatch { display: inline-block; width: 0.8rem; height: 0.8rem; margin-left: 0.4rem; border-radius: 2px; }
.word-cloud { max-width: 100%; height: auto; }
footer { margin-top: 2rem; border-top: 1px solid #e0e0e0; padding-top: 1rem; }
"#;

pub const ANALYZE_TOGGLE_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('dashboard');
  var button = document.getElementById('analyze');
  if (!form || !button) return;
  function sync() {
    var text = form.querySelector('textarea[name=text]');
    var carried = form.querySelector('input[name=uploaded_text]');
    var file = form.querySelector('input[name=file]');
    var hasText = (text && text.value.length > 0) || (carried && carried.value.length > 0);
    var hasFile = file && file.files && file.files.length > 0;
    button.disabled = !(hasText || hasFile);
  }
  form.querySelectorAll('input[name=input_method]').forEach(function (radio) {
    radio.addEventListener('change', function () { form.submit(); });
  });
  form.addEventListener('input', sync);
  form.addEventListener('change', sync);
  sync();
})();
"#;

//! Stylesheet and browser script embedded in the rendered page.

/// Default location of the QRious helper.
pub const QRIOUS_CDN_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/qrious/4.0.2/qrious.min.js";

/// Page stylesheet.
pub(crate) const PAGE_CSS: &str = r##"
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#14161b;--card:#1d2027;--line:#2b303a;--text:#eef1f6;--muted:#9aa3b2;--accent:#00c6fb;--danger:#ef4444;--font:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.55;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
.page{max-width:560px;margin:0 auto;padding:20px 16px 48px}
.topbar{display:flex;justify-content:flex-end;margin-bottom:16px}
.lang-btn{display:inline-flex;align-items:center;gap:8px;padding:6px 14px;border:1px solid var(--line);border-radius:999px;background:var(--card);font-size:14px;cursor:pointer}
.card{background:var(--card);border:1px solid var(--line);border-radius:16px;padding:18px;margin-bottom:16px}
.sub-head{font-size:13px;color:var(--muted);text-transform:uppercase;letter-spacing:.06em;margin-bottom:12px}
.sub-body{display:flex;gap:16px;align-items:center}
.qr-canvas{width:64px;height:64px;border-radius:8px;background:#fff;flex:none}
.sub-info{display:flex;flex-direction:column;gap:6px;min-width:0}
.vpn-key{font-family:ui-monospace,SFMono-Regular,Menlo,monospace;font-size:16px;word-break:break-all}
.sub-expires{font-size:13px;color:var(--muted)}
.sub-link-btn,.add-sub-btn{align-self:flex-start;margin-top:6px;padding:8px 16px;border:none;border-radius:10px;background:var(--accent);color:#06232c;font-weight:600;font-size:14px;cursor:pointer;font-family:var(--font)}
.sub-link-btn.copy-failed,.add-sub-btn.copy-failed{background:var(--danger);color:#fff}
.install-head{display:flex;justify-content:space-between;align-items:center;margin-bottom:12px}
.install-head h2{font-size:18px}
.device-select{background:var(--bg);color:var(--text);border:1px solid var(--line);border-radius:8px;padding:4px 8px}
.install-tabs{display:flex;gap:8px;margin-bottom:16px}
.install-tab{flex:1;text-align:center;padding:8px 0;border-radius:10px;border:1px solid var(--line);color:var(--muted);font-weight:600;font-size:14px}
.install-tab.active{border-color:var(--accent);color:var(--text);background:rgba(0,198,251,.08)}
.steps-vertical{position:relative;display:flex;flex-direction:column;gap:18px}
.step-vert-line{position:absolute;left:11px;top:12px;bottom:12px;width:2px;background:var(--line)}
.step-row{position:relative;display:flex;gap:14px}
.step-icon{flex:none;width:24px;height:24px;position:relative}
.step-title{font-weight:700;margin-bottom:4px}
.step-desc{font-size:14px;color:var(--muted)}
.os-btns{display:flex;gap:8px;margin-top:10px;flex-wrap:wrap}
.os-btn{display:inline-flex;align-items:center;gap:6px;padding:6px 12px;border:1px solid var(--line);border-radius:8px;font-size:13px}
.os-ico{width:14px;height:14px;border-radius:3px;background:var(--muted)}
[data-tooltip]:hover::after{content:attr(data-tooltip);position:absolute;left:0;top:100%;margin-top:4px;white-space:nowrap;font-size:12px;background:#000;color:#fff;padding:2px 6px;border-radius:4px;z-index:2}
"##;

/// Browser behaviour. One set of listeners on `document` serves every
/// button, including ones inserted by a tab switch.
pub(crate) const PAGE_JS: &str = r##"
(function () {
  'use strict';
  var FEEDBACK_MS = 1200;
  var data = JSON.parse(document.getElementById('i18n-table').textContent);
  var root = document.documentElement;
  var lang = root.getAttribute('lang') || data.fallback;
  var steps = document.querySelector('.steps-vertical');

  function t(key) {
    var row = data.table[lang] || {};
    if (Object.prototype.hasOwnProperty.call(row, key)) return row[key];
    console.warn('missing translation', lang, key);
    return null;
  }

  function translate(scope) {
    scope.querySelectorAll('[data-i18n]').forEach(function (el) {
      if (el.hasAttribute('data-copy-busy')) return;
      var text = t(el.getAttribute('data-i18n'));
      if (text !== null) el.textContent = text;
    });
    scope.querySelectorAll('[data-i18n-tooltip]').forEach(function (el) {
      var text = t(el.getAttribute('data-i18n-tooltip'));
      if (text !== null) el.setAttribute('data-tooltip', text);
    });
  }

  function retarget(selector, name, value) {
    document.querySelectorAll(selector).forEach(function (a) {
      var url = new URL(a.href, window.location.href);
      url.searchParams.set(name, value);
      a.setAttribute('href', url.search);
    });
  }

  function remember(name, value) {
    try {
      var url = new URL(window.location.href);
      url.searchParams.set(name, value);
      window.history.replaceState(null, '', url);
    } catch (e) { /* file:// pages may refuse */ }
  }

  function selectTab(id) {
    var tpl = document.querySelector('template[data-steps="' + id + '"]');
    if (!tpl || !steps) return false;
    document.querySelectorAll('.install-tab').forEach(function (tab) {
      var on = tab.getAttribute('data-tab') === id;
      tab.classList.toggle('active', on);
      tab.setAttribute('aria-selected', on ? 'true' : 'false');
    });
    steps.replaceChildren(tpl.content.cloneNode(true));
    steps.setAttribute('data-active-tab', id);
    translate(steps);
    remember('tab', id);
    retarget('.lang-btn', 'tab', id);
    return true;
  }

  function toggleLang(btn) {
    var next = lang === data.langs[0] ? data.langs[1] : data.langs[0];
    var other = lang;
    lang = next;
    root.setAttribute('lang', lang);
    btn.querySelector('.lang-txt').textContent = data.indicator[lang].label;
    btn.querySelector('.lang-flag').textContent = data.indicator[lang].flag;
    translate(document);
    remember('lang', lang);
    retarget('.install-tab', 'lang', lang);
    retarget('.lang-btn', 'lang', other);
  }

  function copy(btn) {
    var keyEl = document.getElementById('vpn-key');
    var key = keyEl ? keyEl.textContent : '';
    function feedback(ok) {
      clearTimeout(btn.copyTimer);
      btn.setAttribute('data-copy-busy', '');
      btn.classList.toggle('copy-failed', !ok);
      btn.textContent = t(ok ? 'copied' : 'copyFailed');
      btn.copyTimer = setTimeout(function () {
        btn.removeAttribute('data-copy-busy');
        btn.classList.remove('copy-failed');
        var label = t(btn.getAttribute('data-i18n'));
        if (label !== null) btn.textContent = label;
      }, FEEDBACK_MS);
    }
    if (!navigator.clipboard || !navigator.clipboard.writeText) {
      console.warn('clipboard unavailable');
      feedback(false);
      return;
    }
    navigator.clipboard.writeText(key).then(
      function () { feedback(true); },
      function (err) { console.warn('clipboard write failed', err); feedback(false); }
    );
  }

  document.addEventListener('click', function (ev) {
    if (!(ev.target instanceof Element)) return;
    var copyBtn = ev.target.closest('[data-copy]');
    if (copyBtn) { ev.preventDefault(); copy(copyBtn); return; }
    var tab = ev.target.closest('.install-tab[data-tab]');
    if (tab) { if (selectTab(tab.getAttribute('data-tab'))) ev.preventDefault(); return; }
    var langBtn = ev.target.closest('.lang-btn');
    if (langBtn) { ev.preventDefault(); toggleLang(langBtn); }
  });

  document.addEventListener('change', function (ev) {
    if (!(ev.target instanceof Element) || !ev.target.matches('.device-select')) return;
    remember('device', ev.target.value);
    retarget('a[data-nav]', 'device', ev.target.value);
  });

  var canvas = document.getElementById('qr-canvas');
  if (canvas && window.QRious) {
    var options = JSON.parse(canvas.getAttribute('data-qr'));
    options.element = canvas;
    new window.QRious(options);
  }
})();
"##;

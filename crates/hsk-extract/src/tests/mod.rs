mod structure_tests;

/// A two-word, one-sentence page in the layout of the saved vocabulary pages
pub(crate) const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>HSK 3 Vocabulary List</title>
  <link rel="stylesheet" href="/main.css">
  <style>.word-card > .hanzi { font-size: 2em; }</style>
  <script>if (window.innerWidth < 600) { document.body.classList.add("small"); }</script>
</head>
<body>
  <nav class="menu"><a href="/hsk-1">HSK 1</a><a href="/hsk-2">HSK 2</a></nav>
  <h1 class="page-title">HSK 3 words</h1>
  <ul class="word-list">
    <li class="word-card" data-id="101">
      <div class="hanzi">月亮</div>
      <div class="hanzi-traditional">月亮</div>
      <div class="pinyin">yuè  liang</div>
      <div class="definition">moon</div>
      <div class="audio">
        <a href="https://cdn.example.com/audio/hsk3/yueliang.mp3">mp3</a>
        <audio><source src="/audio/hsk3/yueliang.ogg?v=3" type="audio/ogg"></audio>
      </div>
    </li>
    <li class="word-card featured" data-id="102">
      <div class="hanzi">得(助动词)</div>
      <div class="pinyin">děi</div>
      <div class="definition">must; to have to &amp; need</div>
      <br>
    </li>
  </ul>
  <section class="examples">
    <div class="sentence-card">
      <p class="hanzi">今天晚上的<b>月亮</b>很圆。</p>
      <p class="pinyin">Jīntiān wǎnshang de yuèliang hěn yuán.</p>
      <p class="definition">The moon is very round tonight.</p>
      <div class="audio"><a href="/s/1.mp3">play</a></div>
    </div>
  </section>
</body>
</html>
"#;

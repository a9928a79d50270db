/// The single-page UI: a sidebar for credential entry and a main area
/// with the record control and per-turn output.
///
/// The credential lives only in the password field (browser memory) and
/// is sent with each turn as the `x-api-key` header; it is never stored.
/// Each completed turn replaces the previous turn's cards and player.
pub fn index_page() -> &'static str {
    PAGE
}

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Voice Tutor</title>
<style>
  body { margin: 0; font-family: Arial, sans-serif; display: flex; min-height: 100vh; }
  .sidebar { width: 280px; background: #f4f4f4; padding: 20px; box-sizing: border-box; }
  .sidebar h2 { font-size: 1.1em; }
  .sidebar input { width: 100%; padding: 8px; box-sizing: border-box; }
  .main { flex: 1; padding: 30px; text-align: center; }
  .main h1 { color: #4CAF50; font-size: 3em; margin-bottom: 0; }
  .main .tagline { color: #555; font-size: 1.2em; }
  .main hr { border: 1px solid #4CAF50; }
  .logo { font-size: 4em; }
  button#record { font-size: 1.2em; padding: 12px 28px; border-radius: 8px;
    border: none; background: #4CAF50; color: white; cursor: pointer; }
  button#record.recording { background: #c0392b; }
  #status { color: #555; margin-top: 12px; min-height: 1.2em; }
  .card { box-shadow: 0 4px 8px 0 rgba(0,0,0,0.2); transition: 0.3s;
    border-radius: 10px; padding: 20px; background-color: #f9f9f9;
    margin-top: 20px; color: black; text-align: left; direction: ltr; }
  .card:hover { box-shadow: 0 8px 16px 0 rgba(0,0,0,0.2); }
  .card h4 { color: #4CAF50; margin-top: 0; }
  .card-body { padding: 10px 20px; }
  #player { margin-top: 20px; }
</style>
</head>
<body>
<div class="sidebar">
  <h2>&#128273; API Key Configuration</h2>
  <p>Enter your OpenAI API key below. It is kept in memory for this
  session only and sent with each request.</p>
  <input id="api-key" type="password" placeholder="Enter your OpenAI API key">
</div>
<div class="main">
  <div class="logo">&#127891;</div>
  <h1>Voice Tutor</h1>
  <p class="tagline">Record a question and hear the answer spoken back.</p>
  <hr>
  <h2 style="color:#4CAF50">&#127908; Record Your Voice</h2>
  <button id="record">Start recording</button>
  <div id="status"></div>
  <div id="cards"></div>
  <div id="player"></div>
</div>
<script>
const recordBtn = document.getElementById('record');
const statusEl = document.getElementById('status');
const cardsEl = document.getElementById('cards');
const playerEl = document.getElementById('player');
let recorder = null;
let chunks = [];

recordBtn.addEventListener('click', async () => {
  if (recorder && recorder.state === 'recording') {
    recorder.stop();
    return;
  }
  const key = document.getElementById('api-key').value.trim();
  if (!key) {
    statusEl.textContent = 'Enter your API key first.';
    return;
  }
  const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
  recorder = new MediaRecorder(stream);
  chunks = [];
  recorder.ondataavailable = (e) => chunks.push(e.data);
  recorder.onstop = () => {
    stream.getTracks().forEach((t) => t.stop());
    submitTurn(key, new Blob(chunks, { type: recorder.mimeType }));
  };
  recorder.start();
  recordBtn.textContent = 'Stop recording';
  recordBtn.classList.add('recording');
  statusEl.textContent = 'Recording...';
});

async function submitTurn(key, blob) {
  recordBtn.textContent = 'Start recording';
  recordBtn.classList.remove('recording');
  statusEl.textContent = 'Processing...';
  const form = new FormData();
  form.append('recording', blob, 'capture.webm');
  try {
    const res = await fetch('/turns', {
      method: 'POST',
      headers: { 'x-api-key': key },
      body: form,
    });
    if (!res.ok) {
      const err = await res.json().catch(() => ({ error: res.statusText }));
      statusEl.textContent = 'Turn failed: ' + err.error;
      return;
    }
    const turn = await res.json();
    cardsEl.innerHTML = turn.transcript_card + turn.response_card;
    playerEl.innerHTML = turn.audio_player;
    statusEl.textContent = '';
  } catch (e) {
    statusEl.textContent = 'Turn failed: ' + e.message;
  }
}
</script>
</body>
</html>
"##;
